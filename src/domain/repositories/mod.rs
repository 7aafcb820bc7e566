//! Repository access for the service layer

use super::category::CategoryRepository;
use super::collaborator::CollaboratorRepository;
use super::invitation::InvitationRepository;
use super::item::ItemRepository;
use super::list::ListRepository;
use super::user::UserRepository;

/// Provides access to all domain repositories.
///
/// Services hold one provider and request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let list = repos.lists().find_by_id(list_id).await?;
///     let items = repos.items().find_by_list(list_id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn lists(&self) -> &dyn ListRepository;
    fn items(&self) -> &dyn ItemRepository;
    fn collaborators(&self) -> &dyn CollaboratorRepository;
    fn invitations(&self) -> &dyn InvitationRepository;
    fn categories(&self) -> &dyn CategoryRepository;
    fn users(&self) -> &dyn UserRepository;
}
