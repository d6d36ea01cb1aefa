pub mod activity_board;
