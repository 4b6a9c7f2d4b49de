use std::path::PathBuf;

use alogorithm2::{AnimationOptions, Animator, Mode, ProgressDrive, SeedList, render_frame_svg};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let out_dir = PathBuf::from("target/morph_frames");
    std::fs::create_dir_all(&out_dir)?;

    for mode in [Mode::Morph, Mode::Fly] {
        let opts = AnimationOptions {
            seed: Some("alogorithm".to_string()),
            size: 256.0,
            mode,
            duration_ms: 1000.0,
            interval_ms: 1500.0,
            ..AnimationOptions::default()
        };
        let seeds = SeedList::new(["two", "three"])?;
        let mut animator = Animator::new(opts, seeds, ProgressDrive::Automatic)?;
        animator.mount()?;

        // 24 fps over two full cycles.
        for i in 0..=72u32 {
            let now_ms = f64::from(i) * 1000.0 / 24.0;
            animator.advance_to(now_ms)?;
            if let Some(frame) = animator.frame() {
                let svg = render_frame_svg(&frame, 256.0)?;
                std::fs::write(out_dir.join(format!("{mode}_{i:03}.svg")), svg)?;
            }
        }
        animator.teardown();
    }

    println!("wrote frames to {}", out_dir.display());
    Ok(())
}
