pub mod gitlab_mr_route;
