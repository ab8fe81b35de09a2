// dataform - schema-driven forms for Rust + HTMX
// Field descriptors in, Maud markup and a flat name -> value map out

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod renderer;
pub mod validation;
pub mod widgets;

// Re-export Maud so embedders render with the same version
pub use maud::{html as maud, Markup, PreEscaped, Render, DOCTYPE};

// Re-export core types
pub use config::FormConfiguration;
pub use controller::{DataForm, FormEvent, FormState, SubmitHandler, SubmitOutcome};
pub use error::{FormError, FormResult};
pub use field::{FieldDescriptor, FieldType, SelectOption};
pub use renderer::{control_name, render_field};
pub use validation::FormValues;
pub use widgets::FieldEvents;
