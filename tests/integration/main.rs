//! End-to-end runs over generated and hand-built worlds.

mod adventure;
