use super::super::math::*;
use super::*;

#[derive(Debug, Clone, Copy)]
pub struct DrawLineStripCommand<'a> {
    /// Vertex buffer contents.
    pub positions: &'a [Vec3],
    /// Strip order. Indices past the end of `positions` make their segments vanish.
    pub indices: &'a [u32],
    pub uniforms: Uniforms,
    pub program: Program,
}

impl Default for DrawLineStripCommand<'_> {
    fn default() -> Self {
        Self { positions: &[], indices: &[], uniforms: Uniforms::default(), program: Program::default() }
    }
}

/// Consecutive index pairs of an open line strip: n indices give n - 1 segments.
pub fn strip_segments(indices: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    indices.windows(2).map(|w| (w[0], w[1]))
}

// Depth clamp, as with GL_DEPTH_CLAMP: z is never clipped, only squeezed into [0, 1].
fn window_depth(ndc_z: f32) -> f32 {
    (0.5 * ndc_z + 0.5).clamp(0.0, 1.0)
}

#[derive(Clone, Copy)]
struct ScreenPoint {
    x: i32,
    y: i32,
    depth: f32,
    varying: Vec3,
}

/// Draws `command.indices` as one connected polyline. Returns the number of fragments that passed the depth test.
pub fn draw_line_strip(framebuffer: &mut Framebuffer, viewport: &Viewport, command: &DrawLineStripCommand) -> usize {
    if command.indices.len() < 2 || framebuffer.width() == 0 || framebuffer.height() == 0 {
        return 0;
    }

    let model = command.uniforms.model();
    let program = &command.program;
    let width = framebuffer.width() as i32;
    let height = framebuffer.height() as i32;
    let mut written = 0;

    for (i0, i1) in strip_segments(command.indices) {
        let (Some(&p0), Some(&p1)) = (command.positions.get(i0 as usize), command.positions.get(i1 as usize)) else {
            continue;
        };
        let projected = [
            program.vertex(&model, p0), //
            program.vertex(&model, p1),
        ];
        let clipped = clip_line(&projected);
        if clipped.len() < 2 {
            continue;
        }
        let to_screen = |v: Vec4| {
            let screen = viewport.apply(v.to_ndc());
            ScreenPoint { x: screen.x as i32, y: screen.y as i32, depth: window_depth(screen.z), varying: v.xyz() }
        };
        let mut a = to_screen(clipped[0]);
        let mut b = to_screen(clipped[1]);

        let steep = (b.y - a.y).abs() > (b.x - a.x).abs();
        if steep {
            std::mem::swap(&mut a.x, &mut a.y);
            std::mem::swap(&mut b.x, &mut b.y);
        }
        if a.x > b.x {
            std::mem::swap(&mut a, &mut b);
        }

        let dx = b.x - a.x;
        let dy = (b.y - a.y).abs();
        let mut error = dx / 2;
        let y_step = if a.y < b.y { 1 } else { -1 };
        let mut y = a.y;

        for x in a.x..=b.x {
            let screen_x = if steep { y } else { x };
            let screen_y = if steep { x } else { y };

            if screen_x >= 0 && screen_x < width && screen_y >= 0 && screen_y < height {
                let t = if dx > 0 { (x - a.x) as f32 / dx as f32 } else { 0.0 };
                let depth = a.depth + (b.depth - a.depth) * t;
                let (px, py) = (screen_x as usize, screen_y as usize);
                if framebuffer.test_and_set_depth(px, py, depth) {
                    let color = program.fragment(&command.uniforms, lerp(a.varying, b.varying, t));
                    framebuffer.write_color(px, py, RGBA::from_color(color));
                    written += 1;
                }
            }

            error -= dy;
            if error < 0 {
                y += y_step;
                error += dx;
            }
        }
    }
    written
}
