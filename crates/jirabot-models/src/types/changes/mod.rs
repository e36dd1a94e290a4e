mod change_item;
mod changelog;

pub use change_item::JiraChangeItem;
pub use changelog::JiraChangelog;
