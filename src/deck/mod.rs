pub mod decklist;
