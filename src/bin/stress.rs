use ringbuf_static::ring::{InstanceBuf, InstancePool, RingBuf, RingBufInitCfg, RingError};
use ringbuf_static::storage::MmapStorage;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

const ELEM_SIZE: usize = 64;
const NUM_ELEMS: usize = 4096;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("ringbuf-static stress test over mmap storage\n");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    let mut storage = MmapStorage::for_elements(ELEM_SIZE, NUM_ELEMS)?;
    let locked = storage.lock().is_ok();

    let mut slots = [InstanceBuf::EMPTY];
    let mut pool = InstancePool::new(&mut slots);
    let cfg = RingBufInitCfg::new(
        InstancePool::get_inst_buf,
        &mut pool,
        ELEM_SIZE,
        NUM_ELEMS,
        storage.as_mut_slice(),
    );
    let mut ring = RingBuf::create(cfg)?;

    let mut element = [0u8; ELEM_SIZE];
    let mut out = [0u8; ELEM_SIZE];
    let mut pushed = 0u64;
    let mut popped = 0u64;
    let mut rejected = 0u64;

    println!("Running for 5 seconds...");
    let start = Instant::now();

    while running.load(Ordering::Relaxed) && start.elapsed() < Duration::from_secs(5) {
        loop {
            element[..8].copy_from_slice(&pushed.to_le_bytes());
            match ring.push(&element) {
                Ok(()) => pushed += 1,
                Err(RingError::Full { .. }) => {
                    rejected += 1;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        while ring.pop(&mut out).is_ok() {
            let seq = u64::from_le_bytes(out[..8].try_into()?);
            if seq != popped {
                return Err(format!("FIFO order broken: expected {}, got {}", popped, seq).into());
            }
            popped += 1;
        }
    }

    let secs = start.elapsed().as_secs_f64();

    println!("\nResults:");
    println!("  Pushed: {} elements", pushed);
    println!("  Popped: {} elements", popped);
    println!("  Rejected (full): {}", rejected);
    println!("  Storage locked: {}", locked);
    println!(
        "  Throughput: {:.2}M elements/sec",
        popped as f64 / secs / 1_000_000.0
    );

    Ok(())
}
