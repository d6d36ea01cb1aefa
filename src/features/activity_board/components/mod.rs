pub mod activity_card;
pub mod activity_list;
pub mod notice_banner;
pub mod participant_list;
pub mod signup_form;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use notice_banner::NoticeBanner;
pub use participant_list::{ParticipantItem, ParticipantList};
pub use signup_form::SignupForm;
