pub mod gitlab_mr;
pub mod ping;
