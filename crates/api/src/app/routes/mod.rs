pub mod movie_infos;
pub mod movies;
pub mod reviews;
pub mod system;
