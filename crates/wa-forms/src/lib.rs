// Water Accountant forms
// Caller-owned validation state, the Login/Register switch, and form markup

pub mod forms;
pub mod mode;
pub mod render;
pub mod state;

pub use forms::{Form, FormError, FormKind, LoginForm, MeasureForm, ProfileForm, RegisterForm};
pub use mode::{FormMode, FormSwitch, UnknownMode};
pub use state::{FieldStatus, ValidationState};

// Re-export the rule engine so callers need a single dependency
pub use wa_validation;
