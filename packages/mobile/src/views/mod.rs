mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod profile;
pub use profile::ProfileScreen;

mod settings;
pub use settings::Settings;
