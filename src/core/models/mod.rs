pub mod activity;
pub mod board;
pub mod notice;
pub mod participant;

pub use activity::{Activity, ActivityCollection};
pub use board::{ActivityCard, BoardState, LoadState};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use participant::{initials_for, participant_rows, ParticipantRow};
