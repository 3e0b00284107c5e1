use cubist_blocks::{Block, Face, FaceMask, IDENTITY_CORNERS, MaterialId};
use cubist_mesh_cpu::{PositionIndex, faces_coincide, resolve_visibility, resolve_visibility_par};
use proptest::prelude::*;

fn block_at(x: i32, y: i32, z: i32, corners: [u8; 8]) -> Block {
    Block::new(x, y, z, MaterialId(0), corners)
}

fn with_corner(corner: usize, code: u8) -> [u8; 8] {
    let mut c = IDENTITY_CORNERS;
    c[corner] = code;
    c
}

#[test]
fn stacked_identity_blocks_hide_shared_faces() {
    let mut blocks = vec![block_at(0, 0, 0, IDENTITY_CORNERS), block_at(0, 1, 0, IDENTITY_CORNERS)];
    resolve_visibility(&mut blocks);
    assert_eq!(blocks[0].hidden, FaceMask::from(Face::Top));
    assert_eq!(blocks[1].hidden, FaceMask::from(Face::Bottom));
}

#[test]
fn row_of_three_hides_inner_sides() {
    let mut blocks: Vec<Block> = (0..3).map(|x| block_at(x, 0, 0, IDENTITY_CORNERS)).collect();
    resolve_visibility(&mut blocks);
    assert_eq!(blocks[0].hidden, FaceMask::from(Face::Right));
    assert_eq!(blocks[1].hidden.bits(), Face::Left.flag() | Face::Right.flag());
    assert_eq!(blocks[2].hidden, FaceMask::from(Face::Left));
}

#[test]
fn diagonal_and_distant_blocks_do_not_interact() {
    let mut blocks = vec![
        block_at(0, 0, 0, IDENTITY_CORNERS),
        block_at(1, 1, 0, IDENTITY_CORNERS),
        block_at(0, 0, 2, IDENTITY_CORNERS),
    ];
    resolve_visibility(&mut blocks);
    assert!(blocks.iter().all(|b| b.hidden.is_empty()));
}

#[test]
fn matching_in_plane_deformation_is_culled_by_exact_test() {
    // Corner 0 slides along x on the top plane; the block above mirrors it with corner 7.
    let below = block_at(0, 0, 0, with_corner(0, 45));
    let above = block_at(0, 1, 0, with_corner(7, 25));
    assert!(!below.flat.contains(Face::Top));
    assert!(!above.flat.contains(Face::Bottom));
    assert!(faces_coincide(&below, &above, Face::Top));
    assert!(faces_coincide(&above, &below, Face::Bottom));

    let mut blocks = vec![below, above];
    resolve_visibility(&mut blocks);
    assert!(blocks[0].hidden.contains(Face::Top));
    assert!(blocks[1].hidden.contains(Face::Bottom));
}

#[test]
fn back_front_pair_with_matching_edge_is_culled() {
    // Corner 2 of the near block and corner 1 of the far block both move to x=0.25.
    let near = block_at(0, 0, 0, with_corner(2, 99));
    let far = block_at(0, 0, 1, with_corner(1, 95));
    let mut blocks = vec![near, far];
    resolve_visibility(&mut blocks);
    assert!(blocks[0].hidden.contains(Face::Back));
    assert!(blocks[1].hidden.contains(Face::Front));
}

#[test]
fn partial_overlap_is_never_culled() {
    let mut blocks = vec![
        block_at(0, 0, 0, with_corner(0, 45)),
        block_at(0, 1, 0, IDENTITY_CORNERS),
    ];
    resolve_visibility(&mut blocks);
    assert!(blocks[0].hidden.is_empty());
    assert!(blocks[1].hidden.is_empty());
}

#[test]
fn face_off_the_border_is_never_culled() {
    // Corner 0 sinks to y=0.25 on both blocks; the top face no longer touches its border.
    let mut blocks = vec![
        block_at(0, 0, 0, with_corner(0, 15)),
        block_at(0, 1, 0, with_corner(0, 15)),
    ];
    resolve_visibility(&mut blocks);
    assert!(!blocks[0].hidden.contains(Face::Top));
    assert!(!blocks[1].hidden.contains(Face::Bottom));
}

#[test]
fn lattice_edge_has_no_wraparound_neighbor() {
    let mut blocks = vec![
        block_at(i32::MAX, 0, 0, IDENTITY_CORNERS),
        block_at(i32::MIN, 0, 0, IDENTITY_CORNERS),
    ];
    resolve_visibility(&mut blocks);
    assert!(blocks.iter().all(|b| b.hidden.is_empty()));
}

#[test]
fn cells_past_i16_range_only_touch_real_neighbors() {
    let edge = i32::from(i16::MAX);
    let mut blocks = vec![
        block_at(edge, 0, 0, IDENTITY_CORNERS),
        block_at(edge + 1, 0, 0, IDENTITY_CORNERS),
        block_at(-edge, 0, 0, IDENTITY_CORNERS),
    ];
    resolve_visibility(&mut blocks);
    assert!(blocks[0].hidden.contains(Face::Right));
    assert!(blocks[1].hidden.contains(Face::Left));
    assert!(blocks[2].hidden.is_empty());
}

#[test]
fn duplicate_cells_index_the_first_block() {
    let blocks = vec![
        block_at(0, 0, 0, IDENTITY_CORNERS),
        block_at(0, 0, 0, IDENTITY_CORNERS),
    ];
    let index = PositionIndex::build(&blocks);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(0, 0, 0), Some(0));
}

fn corner_code() -> impl Strategy<Value = Option<u8>> {
    // Mostly identity corners, sometimes an arbitrary lattice point.
    prop_oneof![3 => Just(None), 1 => (0u8..125).prop_map(Some)]
}

fn arb_block() -> impl Strategy<Value = Block> {
    (0i32..3, 0i32..3, 0i32..3, proptest::array::uniform8(corner_code())).prop_map(
        |(x, y, z, codes)| {
            let mut corners = IDENTITY_CORNERS;
            for (c, code) in corners.iter_mut().zip(codes) {
                if let Some(code) = code {
                    *c = code;
                }
            }
            block_at(x, y, z, corners)
        },
    )
}

fn arb_model() -> impl Strategy<Value = Vec<Block>> {
    proptest::collection::vec(arb_block(), 0..27).prop_map(|mut v| {
        let mut seen = std::collections::HashSet::new();
        v.retain(|b| seen.insert(b.position()));
        v
    })
}

proptest! {
    // Every hidden face has a neighbor across it that hides the opposite face.
    #[test]
    fn hidden_faces_are_symmetric(model in arb_model()) {
        let mut blocks = model;
        resolve_visibility(&mut blocks);
        let index = PositionIndex::build(&blocks);
        for b in &blocks {
            for face in b.hidden.iter() {
                let j = index.neighbor(b, face);
                prop_assert!(j.is_some(), "{:?} hidden without neighbor", face);
                prop_assert!(blocks[j.unwrap()].hidden.contains(face.opposite()));
            }
        }
    }

    // A second pass never changes the result.
    #[test]
    fn resolution_is_idempotent(model in arb_model()) {
        let mut once = model;
        resolve_visibility(&mut once);
        let mut twice = once.clone();
        resolve_visibility(&mut twice);
        prop_assert_eq!(once, twice);
    }

    // Block order does not matter.
    #[test]
    fn resolution_ignores_block_order(model in arb_model()) {
        let mut forward = model.clone();
        let mut reversed: Vec<Block> = model.into_iter().rev().collect();
        resolve_visibility(&mut forward);
        resolve_visibility(&mut reversed);
        reversed.reverse();
        prop_assert_eq!(forward, reversed);
    }

    // The parallel pass matches the sequential one bit for bit.
    #[test]
    fn parallel_matches_sequential(model in arb_model()) {
        let mut seq = model.clone();
        let mut par = model;
        resolve_visibility(&mut seq);
        resolve_visibility_par(&mut par);
        prop_assert_eq!(seq, par);
    }
}
