//! # mmcs-core
//!
//! Core types shared by every mmcs crate.
//!
//! - Week rotation enums (`WeekType`, `WeekTypeOption`)
//! - Raw schedule records as delivered by a repository (lessons, periods, schedules)
//! - Display projections produced by the formatter (`DisplayLesson`, `DaySchedule`)
//! - The Monday-first day-name table
//! - Cross-cutting error types

pub mod days;
pub mod entities;
pub mod enums;
pub mod errors;
