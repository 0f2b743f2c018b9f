//! Per-entity repositories. One repository per table, one operation per
//! CRUD verb.

mod attachment_repo;
mod comment_repo;
mod invitation_repo;
mod milestone_repo;
mod notification_repo;
mod project_repo;
mod task_repo;
mod user_repo;

pub use attachment_repo::AttachmentRepo;
pub use comment_repo::CommentRepo;
pub use invitation_repo::InvitationRepo;
pub use milestone_repo::MilestoneRepo;
pub use notification_repo::NotificationRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
