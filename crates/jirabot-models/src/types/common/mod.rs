mod avatar_urls;
mod user;

pub use avatar_urls::JiraAvatarUrls;
pub use user::JiraUser;
