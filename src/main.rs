use ringbuf_static::ring::{InstanceBuf, InstancePool, RingBuf, RingBufInitCfg, RingError};
use ringbuf_static::storage::MmapStorage;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

const SAMPLE_SIZE: usize = std::mem::size_of::<u64>();
const NUM_SAMPLES: usize = 4096;
const SAMPLES_PER_TICK: u64 = 64;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("ringbuf-static v0.1.0");
    println!("Press Ctrl+C to stop\n");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        println!("\nShutting down...");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    let mut storage = MmapStorage::for_elements(SAMPLE_SIZE, NUM_SAMPLES)?;
    if let Err(e) = storage.lock() {
        println!("[WARN] could not lock sample storage in memory: {}", e);
    }

    let mut slots = [InstanceBuf::EMPTY];
    let mut pool = InstancePool::new(&mut slots);

    let cfg = RingBufInitCfg::new(
        InstancePool::get_inst_buf,
        &mut pool,
        SAMPLE_SIZE,
        NUM_SAMPLES,
        storage.as_mut_slice(),
    );
    let mut ring = RingBuf::create(cfg)?;

    let mut next_sample = 0u64;
    let mut total_popped = 0u64;
    let mut total_dropped = 0u64;
    let mut checksum = 0u64;
    let mut out = [0u8; SAMPLE_SIZE];
    let mut last_report = Instant::now();

    println!("Sampling. Waiting for Ctrl+C...");

    while running.load(Ordering::SeqCst) {
        for _ in 0..SAMPLES_PER_TICK {
            match ring.push(&next_sample.to_le_bytes()) {
                Ok(()) => {}
                Err(RingError::Full { .. }) => total_dropped += 1,
                Err(e) => return Err(e.into()),
            }
            next_sample += 1;
        }

        loop {
            match ring.pop(&mut out) {
                Ok(()) => {
                    checksum = checksum.wrapping_add(u64::from_le_bytes(out));
                    total_popped += 1;
                }
                Err(RingError::Empty) => break,
                Err(e) => return Err(e.into()),
            }
        }

        if last_report.elapsed() >= Duration::from_secs(5) {
            println!(
                "[STATUS] samples_popped={} samples_dropped={} ring_len={} ring_available={}",
                total_popped,
                total_dropped,
                ring.len(),
                ring.available()
            );
            last_report = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(10));
    }

    println!("Total samples processed: {}", total_popped);
    println!("Checksum: {:#018x}", checksum);
    Ok(())
}
