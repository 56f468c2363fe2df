pub mod articles;
pub mod auth;
pub mod comments;
pub mod users;

pub use articles::{ArticleDto, IndexSweep, SearchResultDto};
pub use auth::{AuthTokenDto, AuthTokenPairDto, IssuedToken, LoginResult};
pub use comments::{BatchApproveOutcome, CommentDto, SpamSweep};
pub use users::UserDto;
