mod create_resume;
mod mongodb_store;
mod read_resume;
