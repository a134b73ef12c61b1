mod contact;
mod home;
mod investor;
mod mission;
mod not_found;

pub use contact::ContactUsPage;
pub use home::HomePage;
pub use investor::InvestorDeckPage;
pub use mission::MissionPage;
pub use not_found::NotFoundPage;
