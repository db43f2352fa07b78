pub mod calendar;
pub mod conflict;
pub mod ledger;
pub mod recommend;
pub mod time;

pub use calendar::{CalendarBlock, DayColumn, WeeklyCalendar};
pub use conflict::ConflictRef;
pub use ledger::{AdmitOutcome, CreditStatus, Rejection, SelectionLedger};
pub use recommend::{Recommendation, RecommendationWindow, Tier};
pub use time::{GridMinute, TimeRange};
