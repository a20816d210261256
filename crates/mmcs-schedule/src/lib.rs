//! # mmcs-schedule
//!
//! Presentation logic for a class schedule.
//!
//! - [`resolver`]: which week type to show for the user's option, and its subtitle
//! - [`formatter`]: raw group/teacher schedules into full/upper/lower day views
//! - [`presenter`]: the fetch-resolve-fetch-format sequence driving a view
//! - [`repository`], [`preferences`], [`view`]: the collaborator seams
//! - [`local`]: an in-memory repository backed by a JSON bundle

pub mod error;
pub mod formatter;
pub mod local;
pub mod preferences;
pub mod presenter;
pub mod repository;
pub mod resolver;
pub mod view;

mod test_support;

pub use error::{PreferencesError, RepositoryError, ScheduleError};
pub use local::{LocalRepository, ScheduleBundle};
pub use preferences::{MemoryPreferences, Preferences, TomlPreferences};
pub use presenter::SchedulePresenter;
pub use repository::ScheduleRepository;
pub use resolver::Resolution;
pub use view::ScheduleView;
