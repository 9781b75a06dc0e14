use foilmesh::airfoil::naca::NacaCode;
use foilmesh::sweep::{run_sweep, AlphaSweep};
use foilmesh::{write_airfoil_stl, MeshConfig, MeshError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "usage:
  naca2stl <FOIL> <ALPHA_DEG> [-o PATH] [options]
  naca2stl sweep <FOIL> <START> [STOP] [STEP] [--root DIR] [options]

options:
  --config FILE   JSON file with chord, span, points and solid_name
  --chord X       chord length (default 1)
  --span X        span along y (default 2)
  --points N      chordwise stations (default 1000)";

/// Command line after option parsing
struct Args {
    positional: Vec<String>,
    output: PathBuf,
    root: PathBuf,
    config: MeshConfig,
}

fn invalid(msg: impl Into<String>) -> MeshError {
    MeshError::InvalidParameter(msg.into())
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, MeshError> {
    let value = value.ok_or_else(|| invalid(format!("{} needs a value", flag)))?;
    value
        .parse()
        .map_err(|_| invalid(format!("{} expects a number, got {:?}", flag, value)))
}

// A leading '-' followed by a digit is a negative angle, not a flag
fn is_flag(s: &str) -> bool {
    match s.strip_prefix('-') {
        Some(rest) => !rest.is_empty() && !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.'),
        None => false,
    }
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args, MeshError> {
    let mut positional = Vec::new();
    let mut output = PathBuf::from("airfoil.stl");
    let mut root = PathBuf::from(".");
    let mut config_file: Option<PathBuf> = None;
    let mut chord: Option<f64> = None;
    let mut span: Option<f64> = None;
    let mut points: Option<usize> = None;

    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = raw
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| invalid("--output needs a path"))?
            }
            "--root" => {
                root = raw
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| invalid("--root needs a directory"))?
            }
            "--config" => {
                config_file = Some(
                    raw.next()
                        .map(PathBuf::from)
                        .ok_or_else(|| invalid("--config needs a file"))?,
                )
            }
            "--chord" => chord = Some(number("--chord", raw.next())?),
            "--span" => span = Some(number("--span", raw.next())?),
            "--points" => points = Some(number("--points", raw.next())?),
            s if is_flag(s) => return Err(invalid(format!("unknown option {}", s))),
            _ => positional.push(arg),
        }
    }

    let mut config = match config_file {
        Some(path) => MeshConfig::from_json_file(&path)?,
        None => MeshConfig::default(),
    };
    if let Some(c) = chord {
        config = config.chord(c);
    }
    if let Some(s) = span {
        config = config.span(s);
    }
    if let Some(p) = points {
        config = config.points(p);
    }

    Ok(Args {
        positional,
        output,
        root,
        config,
    })
}

fn angle(value: &str) -> Result<f64, MeshError> {
    value
        .parse()
        .map_err(|_| invalid(format!("angle of attack must be a number, got {:?}", value)))
}

fn run_single(args: &Args) -> Result<(), MeshError> {
    let [foil, alpha] = args.positional.as_slice() else {
        return Err(invalid(USAGE));
    };
    let code: NacaCode = foil.parse()?;
    write_airfoil_stl(&args.output, &code, angle(alpha)?, &args.config)?;
    Ok(())
}

fn run_sweep_command(args: &Args, rest: &[String]) -> Result<(), MeshError> {
    let (foil, bounds) = rest.split_first().ok_or_else(|| invalid(USAGE))?;
    let code: NacaCode = foil.parse()?;
    let sweep = match bounds {
        [start] => AlphaSweep::single(angle(start)?)?,
        [start, stop] => AlphaSweep::new(angle(start)?, angle(stop)?, 1.0)?,
        [start, stop, step] => AlphaSweep::new(angle(start)?, angle(stop)?, angle(step)?)?,
        _ => return Err(invalid(USAGE)),
    };
    run_sweep(Path::new(&args.root), &code, &sweep, &args.config)?;
    Ok(())
}

fn run(args: Args) -> Result<(), MeshError> {
    match args.positional.first().map(String::as_str) {
        Some("sweep") => run_sweep_command(&args, &args.positional[1..]),
        _ => run_single(&args),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Result<Args, MeshError> {
        parse_args(s.iter().map(|a| a.to_string()))
    }

    #[test]
    fn negative_angles_are_positional() {
        let a = args(&["2412", "-5", "-o", "x.stl"]).unwrap();
        assert_eq!(a.positional, vec!["2412", "-5"]);
        assert_eq!(a.output, PathBuf::from("x.stl"));
    }

    #[test]
    fn overrides_apply_to_config() {
        let a = args(&["0012", "0", "--points", "200", "--span", "0.5"]).unwrap();
        assert_eq!(a.config.points, 200);
        assert_eq!(a.config.span, 0.5);
        assert_eq!(a.config.chord, 1.0);
    }

    #[test]
    fn malformed_foil_writes_no_file() {
        let dir = std::env::temp_dir().join(format!("naca2stl-malformed-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let out = dir.join("airfoil.stl");

        let parsed = args(&["12", "0", "-o", out.to_str().unwrap()]).unwrap();
        let result = run(parsed);
        assert!(matches!(result, Err(MeshError::InvalidParameter(_))));
        assert!(!out.exists());
        assert!(!dir.join("airfoil.stl.tmp").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unknown_flags_are_errors() {
        assert!(args(&["0012", "0", "--fast"]).is_err());
        assert!(args(&["0012", "0", "-x"]).is_err());
        assert!(args(&["0012", "0", "--points", "many"]).is_err());
    }
}
