//! Core types and traits for the EasyEdit text-input widget.
//!
//! This crate provides foundational types used throughout EasyEdit:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Events: [`Event`], [`Key`]
//! - The [`Widget`] and [`Canvas`] traits, with [`RecordingCanvas`] for headless painting
//! - Text field input types: [`InputType`], [`Transformation`]

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod input_type;
pub mod lifecycle;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::Color;
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, Key, MouseButton, PointerId, PointerType, TouchId};
pub use geometry::{Point, Rect, Size};
pub use input_type::{InputType, Transformation};
pub use lifecycle::LifecyclePhase;
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, Message, TextStyle, TypeId,
    Widget,
};
