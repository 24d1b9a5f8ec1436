//! Small form controls shared by the views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FieldError, Input, Label};
