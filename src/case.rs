//! Text inputs for the external solvers that consume the mesh: flow conditions and viscosity for
//! the CFD case templates, and the command script for the 2D panel-method solver.

use crate::airfoil::naca::NacaCode;
use crate::errors::MeshError;
use crate::stl::format_exp;
use crate::sweep::AlphaSweep;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Kinematic viscosity giving `reynolds` for a flow of `velocity` over a chord of `chord`
pub fn kinematic_viscosity(velocity: f64, chord: f64, reynolds: f64) -> Result<f64, MeshError> {
    if !(reynolds.is_finite() && reynolds > 0.0) {
        return Err(MeshError::InvalidParameter(format!(
            "Reynolds number must be positive, got {}",
            reynolds
        )));
    }
    Ok(velocity * chord / reynolds)
}

/// Template values for the `transportProperties` file of a CFD case
pub fn viscosity_values(
    velocity: f64,
    chord: f64,
    reynolds: f64,
) -> Result<HashMap<String, String>, MeshError> {
    let nu = kinematic_viscosity(velocity, chord, reynolds)?;
    debug!(
        "Re={} U={} nu={}",
        format_exp(reynolds, 4),
        format_exp(velocity, 4),
        format_exp(nu, 4)
    );
    Ok(HashMap::from([("nu".to_string(), format_exp(nu, 4))]))
}

/// Free stream and turbulence initial conditions of a CFD case
#[derive(Debug, Clone, PartialEq)]
pub struct FlowConditions {
    pub velocity: f64,
    pub pressure: f64,
    pub turbulent_ke: f64,
    pub turbulent_omega: f64,
}

impl Default for FlowConditions {
    fn default() -> Self {
        FlowConditions {
            velocity: 1.0,
            pressure: 0.0,
            turbulent_ke: 1e-3,
            turbulent_omega: 1.0,
        }
    }
}

impl FlowConditions {
    pub fn template_values(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                "flowVelocity".to_string(),
                format!("({} 0 0)", format_exp(self.velocity, 4)),
            ),
            ("pressure".to_string(), self.pressure.to_string()),
            ("turbulentKE".to_string(), self.turbulent_ke.to_string()),
            ("turbulentOmega".to_string(), self.turbulent_omega.to_string()),
        ])
    }
}

/// Substitute `{name}` placeholders in `text`. `{{` and `}}` stand for literal braces, which keeps
/// dictionary syntax in case files intact. A placeholder without a value is an error.
pub fn render_template(text: &str, values: &HashMap<String, String>) -> Result<String, MeshError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(MeshError::InvalidParameter(format!(
                                "unterminated placeholder {{{}",
                                name
                            )))
                        }
                    }
                }
                let value = values.get(&name).ok_or_else(|| {
                    MeshError::InvalidParameter(format!("no value for placeholder {{{}}}", name))
                })?;
                out.push_str(value);
            }
            '}' => {
                return Err(MeshError::InvalidParameter(
                    "unmatched '}' in template".to_string(),
                ))
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Render `<output>.template` into `output`, the layout the CFD case directories use
pub fn render_case_file(output: &Path, values: &HashMap<String, String>) -> Result<(), MeshError> {
    let mut template = output.as_os_str().to_os_string();
    template.push(".template");
    let template = Path::new(&template);

    let text = fs::read_to_string(template).map_err(|e| MeshError::io(template, e))?;
    let rendered = render_template(&text, values)?;
    fs::write(output, rendered).map_err(|e| MeshError::io(output, e))?;
    debug!("wrote {}", output.display());
    Ok(())
}

const PANEL_SOLVER_TEMPLATE: &str = "
{name}
PLOP
G

SAVE
{data_dir}/{name}.foil
OPER
VPAR
N 9

VISC {reynolds}
PACC
{data_dir}/{name}.dat

ASEQ {start} {stop} {step}

QUIT
";

/// Command script for the panel-method solver: load the section, save its coordinates, run a
/// viscous polar over the sweep accumulating results into `<data_dir>/NACA <code>.dat`.
pub fn panel_solver_script(
    code: &NacaCode,
    reynolds: f64,
    sweep: &AlphaSweep,
    data_dir: &str,
) -> Result<String, MeshError> {
    if !(reynolds.is_finite() && reynolds > 0.0) {
        return Err(MeshError::InvalidParameter(format!(
            "Reynolds number must be positive, got {}",
            reynolds
        )));
    }
    let values = HashMap::from([
        ("name".to_string(), format!("NACA {}", code)),
        ("data_dir".to_string(), data_dir.to_string()),
        ("reynolds".to_string(), reynolds.to_string()),
        ("start".to_string(), sweep.start.to_string()),
        ("stop".to_string(), sweep.stop.to_string()),
        ("step".to_string(), sweep.step.to_string()),
    ]);
    render_template(PANEL_SOLVER_TEMPLATE, &values)
}
