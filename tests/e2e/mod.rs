// End-to-end tests for the SaveSora Backend API
//
// Each test builds the full router over an in-memory key-value store and
// serves it on an ephemeral port. The metadata backend is replaced by a stub,
// the clock is manual, and timers are shortened so flows finish quickly.

mod helpers;
mod test_downloads;
mod test_health;
mod test_identity;
