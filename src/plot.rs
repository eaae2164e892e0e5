//!
//! # Drawing shapes
//!
//! The kernel does not depend on any rendering library. Instead, shapes are described as a series of
//! `PlotCommand`s that are sent to a `PlotTarget` supplied by the caller. `Vec<PlotCommand>` is a
//! target that just records the commands.
//!
//! ```
//! # use bezier_kernel::*;
//! # use bezier_kernel::plot::*;
//! #
//! let curve           = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 0.0)]).unwrap();
//! let mut commands    = vec![];
//!
//! plot_curve(&curve, 64, &mut commands, false).unwrap();
//!
//! assert!(commands[0] == PlotCommand::NewPath);
//! assert!(commands[1] == PlotCommand::Move(0.0, 0.0));
//! ```
//!

use super::error::*;
use super::bezier::*;
use super::surface::*;
use super::coordinate::*;

use itertools::*;

///
/// Instructions sent to a plotting target
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlotCommand {
    /// Begins a new path
    NewPath,

    /// Moves to a new point without drawing
    Move(f64, f64),

    /// Draws a line from the current point to a new point
    Line(f64, f64),

    /// Draws a line back to the start of the path
    ClosePath,

    /// Fills the current path
    Fill,

    /// Draws the outline of the current path
    Stroke,

    /// Marks a control point
    Marker(f64, f64),

    /// The drawing is complete and should be shown to the user
    Show
}

///
/// Something that can receive plotting instructions (a window, a file, or a renderer of some kind)
///
pub trait PlotTarget {
    fn draw(&mut self, command: PlotCommand);

    fn draw_list<'a>(&'a mut self, commands: Box<dyn 'a+Iterator<Item=PlotCommand>>) {
        for command in commands {
            self.draw(command);
        }
    }
}

impl PlotTarget for Vec<PlotCommand> {
    #[inline]
    fn draw(&mut self, command: PlotCommand) {
        self.push(command);
    }
}

///
/// Evenly spaced parameters from 0 to 1 (inclusive)
///
fn linspace(num_points: usize) -> BezierResult<Vec<f64>> {
    if num_points < 2 {
        return Err(BezierError::InvalidParameter { value: num_points as f64 });
    }

    let last = (num_points - 1) as f64;
    Ok((0..num_points).map(|index| (index as f64) / last).collect())
}

///
/// Draws a planar curve as a sequence of `num_points` points joined by lines
///
pub fn plot_curve<Coord, Target>(curve: &Curve<Coord>, num_points: usize, target: &mut Target, show: bool) -> BezierResult<()>
where Coord: Coordinate+Coordinate2D, Target: PlotTarget {
    let points = curve.evaluate_multi(&linspace(num_points)?);

    target.draw(PlotCommand::NewPath);
    target.draw_list(Box::new(points.iter()
        .enumerate()
        .map(|(index, point)| if index == 0 { PlotCommand::Move(point.x(), point.y()) } else { PlotCommand::Line(point.x(), point.y()) })));
    target.draw(PlotCommand::Stroke);

    if show {
        target.draw(PlotCommand::Show);
    }

    Ok(())
}

///
/// Draws a planar surface by filling and outlining its edges, then marks its nodes
///
/// Only surfaces with edges (degree 1 and 2) can be drawn
///
pub fn plot_surface<Coord, Target>(surface: &Surface<Coord>, pts_per_edge: usize, target: &mut Target, show: bool) -> BezierResult<()>
where Coord: Coordinate+Coordinate2D, Target: PlotTarget {
    let params                  = linspace(pts_per_edge)?;
    let (edge1, edge2, edge3)   = surface.edges()?;

    // Each edge starts where the last one finished, so the first point of the later edges is skipped
    let outline = edge1.evaluate_multi(&params).into_iter()
        .chain(edge2.evaluate_multi(&params).into_iter().skip(1))
        .chain(edge3.evaluate_multi(&params).into_iter().skip(1))
        .dedup()
        .collect::<Vec<_>>();

    target.draw(PlotCommand::NewPath);
    target.draw_list(Box::new(outline.iter()
        .enumerate()
        .map(|(index, point)| if index == 0 { PlotCommand::Move(point.x(), point.y()) } else { PlotCommand::Line(point.x(), point.y()) })));
    target.draw(PlotCommand::ClosePath);
    target.draw(PlotCommand::Fill);
    target.draw(PlotCommand::Stroke);

    target.draw_list(Box::new(surface.nodes().iter()
        .map(|node| PlotCommand::Marker(node.x(), node.y()))));

    if show {
        target.draw(PlotCommand::Show);
    }

    Ok(())
}
