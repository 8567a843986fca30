mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod profile;
pub use profile::ProfileView;

mod settings;
pub use settings::SettingsView;
