//! Sequences used by the unit tests.

use super::{Cursor, ValueCursor, Sequence, ValueSequence};

/// A sequence that owns its data and cannot be cloned. Its cursors cannot be
/// cloned either, and can only move forwards.
#[derive(Debug, Default, PartialEq)]
pub struct Uncopyable {
    data: Vec<i32>,
}

impl Uncopyable {
    pub fn new(data: impl Into<Vec<i32>>) -> Self { Uncopyable {data: data.into()} }

    pub fn data(&self) -> &[i32] { &self.data }
}

impl Sequence for Uncopyable {
    type Cursor<'a> = UncopyableCursor<'a> where Self: 'a;
    fn begin(&self) -> Self::Cursor<'_> { UncopyableCursor {rest: &self.data} }
    fn len(&self) -> usize { self.data.len() }
}

impl ValueSequence for Uncopyable {
    type Value = i32;
    fn load<'a>(item: &'a i32) -> i32 where Self: 'a { *item }
}

impl AsMut<[i32]> for Uncopyable {
    fn as_mut(&mut self) -> &mut [i32] { &mut self.data }
}

#[derive(Debug)]
pub struct UncopyableCursor<'a> {
    rest: &'a [i32],
}

impl<'a> Cursor for UncopyableCursor<'a> {
    type Item = &'a i32;
    fn is_end(&self) -> bool { self.rest.is_empty() }
    fn advance(&mut self) {
        if let Some((_, rest)) = self.rest.split_first() { self.rest = rest; }
    }
    fn get(&self) -> &'a i32 { &self.rest[0] }
}

impl<'a> ValueCursor for UncopyableCursor<'a> {
    type Value = i32;
    fn value(&self) -> i32 { *self.get() }
}

// ----------------------------------------------------------------------------

/// A singly-linked list stored in an arena. Its cursors can only move
/// forwards.
#[derive(Debug)]
pub struct Chain<T> {
    nodes: Vec<(T, Option<usize>)>,
    head: Option<usize>,
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item=T>>(items: I) -> Self {
        // Link the nodes back to front, so that `head` is the last node pushed.
        let mut items: Vec<T> = items.into_iter().collect();
        let mut nodes = Vec::with_capacity(items.len());
        let mut head = None;
        while let Some(item) = items.pop() {
            nodes.push((item, head));
            head = Some(nodes.len() - 1);
        }
        Chain {nodes, head}
    }
}

#[derive(Debug)]
pub struct ChainCursor<'a, T> {
    nodes: &'a [(T, Option<usize>)],
    current: Option<usize>,
}

impl<'a, T> Cursor for ChainCursor<'a, T> {
    type Item = &'a T;
    fn is_end(&self) -> bool { self.current.is_none() }
    fn advance(&mut self) {
        if let Some(i) = self.current { self.current = self.nodes[i].1; }
    }
    fn get(&self) -> &'a T {
        let i = self.current.expect("dereferenced the end of a Chain");
        &self.nodes[i].0
    }
}

impl<'a, T: Clone> ValueCursor for ChainCursor<'a, T> {
    type Value = T;
    fn value(&self) -> T { self.get().clone() }
}

impl<T> Sequence for Chain<T> {
    type Cursor<'a> = ChainCursor<'a, T> where Self: 'a;
    fn begin(&self) -> Self::Cursor<'_> { ChainCursor {nodes: &self.nodes, current: self.head} }
}

impl<T: Clone> ValueSequence for Chain<T> {
    type Value = T;
    fn load<'a>(item: &'a T) -> T where Self: 'a { item.clone() }
}

#[test]
fn chain_preserves_order() {
    let chain: Chain<char> = "abc".chars().collect();
    assert_eq!(chain.values().collect::<String>(), "abc");
}

#[test]
fn uncopyable_cursor_walks_forwards() {
    let a = Uncopyable::new([1, 2, 3]);
    let mut cursor = a.begin();
    cursor.advance_by(2);
    assert_eq!(cursor.value(), 3);
    cursor.advance();
    assert!(cursor.is_end());
    assert_eq!(a.values().collect::<Vec<_>>(), [1, 2, 3]);
}
