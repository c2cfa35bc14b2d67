mod guard;
mod listing;
