mod shell;
pub use shell::AppShell;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod upload;
pub use upload::{UploadView, ACCEPTED_DOCUMENTS};

mod settings;
pub use settings::SettingsView;

mod outline;
pub use outline::OutlineView;

mod profile_edit;
pub use profile_edit::ProfileEditView;
