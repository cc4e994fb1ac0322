pub mod card_animated;
