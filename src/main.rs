use minifb::{Key, KeyRepeat, Scale, ScaleMode, Window, WindowOptions};
use quad_life::Life;
use rand::{rngs::SmallRng, SeedableRng};

fn main() {
    // TODO: Drive these with clap
    const GRID_SIZE: usize = 1024;

    // Step the sim once every N rendered frames. The window still redraws
    // every frame.
    const STEP_EVERY_N_FRAMES: u32 = 1;

    let mut pixels = vec![0_u32; GRID_SIZE * GRID_SIZE];
    let mut window = Window::new(
        "👾 Quad Life~!",
        GRID_SIZE,
        GRID_SIZE,
        WindowOptions {
            title: true,
            resize: true,
            scale: Scale::X1,
            scale_mode: ScaleMode::Stretch,

            ..WindowOptions::default()
        },
    )
    .expect("Failed to create a window");

    // TODO: We should query the display's preferred refresh rate instead of assuming 60
    window.set_target_fps(60);

    let mut life = Life::new(GRID_SIZE as i32, GRID_SIZE as i32);
    let mut rng = SmallRng::from_seed(core::array::from_fn(|_| 7));
    life.clear_random(&mut rng);

    let mut is_running = true;
    let mut frames_since_step = 0;

    pack_frame(&mut pixels, life.frame_rgba());

    while window.is_open() {
        if window.is_key_pressed(Key::Escape, KeyRepeat::No)
            || window.is_key_pressed(Key::Q, KeyRepeat::No)
        {
            break;
        }

        if window.is_key_pressed(Key::Space, KeyRepeat::No) {
            is_running ^= true;
        }

        // We don't want to repack the pixel buffer unless the sim changed.
        let mut cells_were_updated = false;

        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            life.clear();

            cells_were_updated = true;
        } else if window.is_key_pressed(Key::R, KeyRepeat::No) {
            life.clear_random(&mut rng);

            cells_were_updated = true;
        } else if window.is_key_pressed(Key::G, KeyRepeat::No) {
            life.clear();

            // Step wide enough that gliders don't interfere
            for x in (0..life.width()).step_by(8) {
                life.write_right_glider(x, 4);
            }

            cells_were_updated = true;
        }

        if is_running {
            frames_since_step += 1;
            if frames_since_step >= STEP_EVERY_N_FRAMES {
                frames_since_step = 0;
                cells_were_updated |= life.step() != 0;
            }
        }

        if cells_were_updated {
            pack_frame(&mut pixels, life.frame_rgba());
        }

        // Present the framebuffer, updated or otherwise, to the screen
        match window.update_with_buffer(&pixels, GRID_SIZE, GRID_SIZE) {
            Ok(()) => {}
            Err(err) => {
                println!("[ERROR] minifb encountered an error updating the framebuffer: {err:#?}")
            }
        }
    }
}

/// Repacks the sim's RGBA bytes into minifb's 0RGB pixels.
fn pack_frame(pixels: &mut [u32], frame: &[u8]) {
    for (px, rgba) in pixels.iter_mut().zip(frame.chunks_exact(4)) {
        *px = u32::from_be_bytes([0, rgba[0], rgba[1], rgba[2]]);
    }
}
