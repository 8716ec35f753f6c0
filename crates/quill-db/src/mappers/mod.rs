//! Model to entity mappers
//!
//! `TryFrom<Model> for Entity` converts database rows to domain objects; the
//! conversion fails only if a row violates the table's value constraint.

mod reaction;
