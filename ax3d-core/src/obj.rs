/// Wavefront OBJ wireframe loader
use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, multispace1},
    combinator::{map_res, opt, recognize},
    multi::{many0, many1},
    number::complete::double,
    sequence::{pair, preceded},
    IResult,
};
use thiserror::Error;

use crate::geometry::{AxonPoint, Figure};
use crate::projection::Axonometry;

/// Failure modes of [`parse_obj`].
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("line {line}: malformed {kind} statement")]
    Malformed { line: usize, kind: &'static str },

    #[error("line {line}: vertex index {index} is out of range ({count} vertices defined)")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        count: usize,
    },
}

/// Parse the wireframe subset of a Wavefront OBJ document.
///
/// `v` statements become points carrying `basis`, `l` polylines become edge
/// chains and `f` faces become closed edge loops. Texture and normal indices
/// after a `/` are accepted and ignored, as is every statement a wireframe
/// has no use for (`vn`, `vt`, `o`, `g`, `s`, `usemtl` and friends). Indices
/// are 1-based; negative indices count back from the most recent vertex.
pub fn parse_obj(input: &str, basis: Axonometry) -> Result<Figure, ObjError> {
    let mut figure = Figure::new();
    for (number, raw) in input.lines().enumerate() {
        let line = number + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        match text.split_whitespace().next() {
            Some("v") => {
                let (rest, (x, y, z)) =
                    parse_vertex(text).map_err(|_| ObjError::Malformed { line, kind: "vertex" })?;
                if !rest.trim().is_empty() {
                    return Err(ObjError::Malformed { line, kind: "vertex" });
                }
                figure.add_point(AxonPoint::new(x, y, z, basis));
            }
            Some("l") => {
                let (rest, indices) = parse_polyline(text)
                    .map_err(|_| ObjError::Malformed { line, kind: "polyline" })?;
                if !rest.trim().is_empty() || indices.len() < 2 {
                    return Err(ObjError::Malformed { line, kind: "polyline" });
                }
                let resolved = resolve_all(&indices, figure.points.len(), line)?;
                for pair in resolved.windows(2) {
                    figure.add_edge(pair[0], pair[1]);
                }
            }
            Some("f") => {
                let (rest, indices) =
                    parse_face(text).map_err(|_| ObjError::Malformed { line, kind: "face" })?;
                if !rest.trim().is_empty() || indices.len() < 3 {
                    return Err(ObjError::Malformed { line, kind: "face" });
                }
                let resolved = resolve_all(&indices, figure.points.len(), line)?;
                for i in 0..resolved.len() {
                    figure.add_edge(resolved[i], resolved[(i + 1) % resolved.len()]);
                }
            }
            _ => {}
        }
    }
    Ok(figure)
}

fn parse_vertex(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(multispace1, double)(input)?;
    let (input, y) = preceded(multispace1, double)(input)?;
    let (input, z) = preceded(multispace1, double)(input)?;
    // Trailing components (a weight, or r g b vertex colors) are dropped.
    let (input, _) = many0(preceded(multispace1, double))(input)?;
    Ok((input, (x, y, z)))
}

fn parse_polyline(input: &str) -> IResult<&str, Vec<i64>> {
    preceded(tag("l"), many1(preceded(multispace1, parse_element_index)))(input)
}

fn parse_face(input: &str) -> IResult<&str, Vec<i64>> {
    preceded(tag("f"), many1(preceded(multispace1, parse_element_index)))(input)
}

fn parse_index(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(input)
}

/// A face or polyline element: the vertex index, optionally followed by
/// `/texture` and `/normal` indices which a wireframe discards.
fn parse_element_index(input: &str) -> IResult<&str, i64> {
    let (input, index) = parse_index(input)?;
    let (input, _) = opt(preceded(char('/'), opt(parse_index)))(input)?;
    let (input, _) = opt(preceded(char('/'), parse_index))(input)?;
    Ok((input, index))
}

fn resolve_all(indices: &[i64], count: usize, line: usize) -> Result<Vec<usize>, ObjError> {
    indices.iter().map(|&index| resolve(index, count, line)).collect()
}

fn resolve(index: i64, count: usize, line: usize) -> Result<usize, ObjError> {
    let out_of_range = ObjError::IndexOutOfRange { line, index, count };
    if index > 0 {
        let position = (index - 1) as usize;
        if position < count {
            Ok(position)
        } else {
            Err(out_of_range)
        }
    } else if index < 0 {
        let back = index.unsigned_abs() as usize;
        if back <= count {
            Ok(count - back)
        } else {
            Err(out_of_range)
        }
    } else {
        Err(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Edge;

    #[test]
    fn parses_vertices_and_polylines() {
        let source = "v 0 0 0\nv 10 0 0\nv 10 10 0\nl 1 2 3\n";
        let figure = parse_obj(source, Axonometry::isometric()).unwrap();
        assert_eq!(figure.points.len(), 3);
        assert_eq!(figure.edges.len(), 2);
        assert_eq!(figure.edges[0], Edge::new(0, 1));
        assert_eq!(figure.edges[1], Edge::new(1, 2));
        assert_eq!(figure.points[1].x(), 10.0);
    }

    #[test]
    fn faces_close_their_loop() {
        let source = "v 0 0 0\nv 10 0 0\nv 0 10 0\nf 1 2 3\n";
        let figure = parse_obj(source, Axonometry::isometric()).unwrap();
        assert_eq!(figure.edges.len(), 3);
        assert_eq!(figure.edges[2], Edge::new(2, 0));
    }

    #[test]
    fn face_elements_may_carry_texture_and_normal_indices() {
        let source = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1/5/2 2//3 3/4 4\n";
        let figure = parse_obj(source, Axonometry::isometric()).unwrap();
        assert_eq!(figure.edges.len(), 4);
        assert_eq!(figure.edges[3], Edge::new(3, 0));
    }

    #[test]
    fn negative_indices_count_from_the_end() {
        let source = "v 0 0 0\nv 1 0 0\nv 2 0 0\nl -3 -1\n";
        let figure = parse_obj(source, Axonometry::isometric()).unwrap();
        assert_eq!(figure.edges[0], Edge::new(0, 2));
    }

    #[test]
    fn skips_comments_and_unknown_statements() {
        let source = "# wireframe\no corner\nvn 0 0 1\nvt 0.5 0.5\ns off\n\
                      v 0 0 0\nv 5 5 5\nusemtl none\nl 1 2\n";
        let figure = parse_obj(source, Axonometry::isometric()).unwrap();
        assert_eq!(figure.points.len(), 2);
        assert_eq!(figure.edges.len(), 1);
    }

    #[test]
    fn empty_input_gives_an_empty_figure() {
        let figure = parse_obj("", Axonometry::isometric()).unwrap();
        assert!(figure.points.is_empty());
        assert!(figure.edges.is_empty());
    }

    #[test]
    fn accepts_scientific_and_fractional_floats() {
        let source = "v 1e1 -2.5 .5\nv 0 0 3.0 1.0\nl 1 2\n";
        let figure = parse_obj(source, Axonometry::isometric()).unwrap();
        assert_eq!(figure.points[0].x(), 10.0);
        assert_eq!(figure.points[0].y(), -2.5);
        assert_eq!(figure.points[0].z(), 0.5);
        assert_eq!(figure.points[1].z(), 3.0);
    }

    #[test]
    fn extra_vertex_components_are_ignored() {
        // A weight or MeshLab-style r g b colors after the position.
        let source = "v 1 2 3 0.8 0.2 0.4\nv 0 0 0 2.0\nl 1 2\n";
        let figure = parse_obj(source, Axonometry::isometric()).unwrap();
        assert_eq!(figure.points.len(), 2);
        let v = figure.points[0];
        assert_eq!((v.x(), v.y(), v.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let source = "v 0 0 0\nl 1 2\n";
        let err = parse_obj(source, Axonometry::isometric()).unwrap_err();
        assert!(matches!(
            err,
            ObjError::IndexOutOfRange {
                line: 2,
                index: 2,
                count: 1
            }
        ));
    }

    #[test]
    fn rejects_index_zero() {
        let source = "v 0 0 0\nv 1 1 1\nl 0 1\n";
        let err = parse_obj(source, Axonometry::isometric()).unwrap_err();
        assert!(matches!(err, ObjError::IndexOutOfRange { index: 0, .. }));
    }

    #[test]
    fn rejects_malformed_statements() {
        let err = parse_obj("v 1 2\n", Axonometry::isometric()).unwrap_err();
        assert!(matches!(err, ObjError::Malformed { line: 1, kind: "vertex" }));

        let err = parse_obj("v 0 0 0\nv 1 1 1\nl 1\n", Axonometry::isometric()).unwrap_err();
        assert!(matches!(
            err,
            ObjError::Malformed {
                line: 3,
                kind: "polyline"
            }
        ));

        let err = parse_obj("v 0 0 0\nf 1 junk\n", Axonometry::isometric()).unwrap_err();
        assert!(matches!(err, ObjError::Malformed { line: 2, kind: "face" }));
    }
}
