//! Planar-mirror diagram demo.
//!
//! Builds the classic incidence diagram for a flat mirror lying on the
//! x-axis and dumps the recorded figure elements as text.
//!
//! ```text
//! cargo run --example planar
//! ```

use catoptrics::figure::{Element, Figure};
use catoptrics::math::{Point2, Vector2};
use catoptrics::mirror::{MirrorSize, PlanarMirror};

fn main() -> catoptrics::Result<()> {
    // Diagnostics go to stderr; override with RUST_LOG (e.g. RUST_LOG=warn).
    env_logger::init();

    let mirror = PlanarMirror::new(Point2::origin(), Vector2::y())?;

    // A ray from the upper left, hitting the surface at (-5, 0).
    let source = Point2::new(-30.0, 25.0);
    let incidence = mirror.normal_from_ray(source, Vector2::new(1.0, -1.0))?;
    let image = mirror.image_point(&source);
    println!(
        "source ({:.1}, {:.1}) -> image ({:.1}, {:.1})",
        source.x, source.y, image.x, image.y
    );

    let mirror = mirror.with_size(MirrorSize::symmetric(40.0, 4.0)?);
    let mut figure = Figure::new();
    mirror
        .draw_mirror(&mut figure)
        .draw_normal_at(&mut figure, &incidence)
        .draw_incident_ray(&mut figure, source, &incidence)
        .draw_reflected_ray_from_point_line(&mut figure, source, &incidence, None)
        .draw_image_segment(&mut figure, source)
        .label_mirror(&mut figure, "mirror")
        .label_rays(&mut figure, source, &incidence, "a", Some("a'"));

    for element in figure.elements() {
        print_element(element);
    }
    Ok(())
}

fn print_element(element: &Element) {
    match element {
        Element::Stroke { path, pen, arrow } => println!(
            "stroke {:?} width {:.1} dash {:?} arrow {}",
            path,
            pen.width(),
            pen.dash(),
            arrow.is_some()
        ),
        Element::Fill { region, tone } => println!("fill {region:?} tone {tone:.2}"),
        Element::Dot { at, radius } => {
            println!("dot ({:.1}, {:.1}) r {:.1}", at.x, at.y, radius);
        }
        Element::Label(label) => println!(
            "label {:?} at ({:.1}, {:.1}) {:?}",
            label.text, label.position.x, label.position.y, label.anchor
        ),
        Element::AngleMark(mark) => println!(
            "angle mark at ({:.1}, {:.1}) from {:.2} to {:.2} rad",
            mark.vertex.x, mark.vertex.y, mark.from_angle, mark.to_angle
        ),
    }
}
