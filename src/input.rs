use glam::Vec2;

/// Viewport point from client coordinates; `None` for NaN or infinite input.
#[inline]
pub fn client_point(x: f64, y: f64) -> Option<Vec2> {
    let p = Vec2::new(x as f32, y as f32);
    p.is_finite().then_some(p)
}

/// First usable point of a touch list, in list order.
pub fn first_point<I>(points: I) -> Option<Vec2>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    points
        .into_iter()
        .find_map(|(x, y)| client_point(x, y))
}
