pub mod account;
pub mod profile;
pub mod settings;

pub use account::AccountPage;
pub use profile::ProfilePage;
pub use settings::SettingsPage;
