pub mod ring_buffer;
pub mod sync_ring_buffer;
