pub mod aggregate;
pub mod calling;
pub mod clock;
pub mod form;
pub mod session;
pub mod view;
