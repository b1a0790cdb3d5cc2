// Modified: 2025-09-20

pub mod sync_cmd;
