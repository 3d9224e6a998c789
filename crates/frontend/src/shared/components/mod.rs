pub mod badge;
pub mod card_animated;
pub mod export_modal;
pub mod import_modal;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
