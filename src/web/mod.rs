//! Request handlers and HTML views over the task store.
//!
//! This layer carries no business logic: each handler calls exactly one
//! task store operation and picks a response view, following the
//! redirect-after-write pattern. Routing and server startup belong to an
//! embedding HTTP framework, which translates [`HandlerResponse`] values
//! into status codes and headers.

mod handlers;
mod views;

pub use handlers::{HandlerError, HandlerResponse, HandlerResult, TaskForm, TaskPages};
pub use views::TaskViews;
