//! Wire models exchanged with the backend.

mod post;
mod user;

pub use post::{
    Author, AuthorRef, CreatePostRequest, Post, PostEnvelope, PostList, UpdatePostRequest,
};
pub use user::{
    LoginRequest, LoginResponse, MessageResponse, RefreshResponse, RegisterRequest,
    RegisterResponse, SendMailRequest, User, VerifyCodeRequest,
};
