// Presentation layer - dashboard shell and the render contract
pub mod renderer;
pub mod shell;
