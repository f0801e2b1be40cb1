//! Builder utilities for ergonomic tree construction.
//!
//! Instead of writing `Box::new(Sequence::new(vec![...]).named("x"))`, use
//! `sequence("x", vec![...])`. Composite helpers take a name because almost
//! every composite in a real tree is worth seeing in telemetry; use the node
//! types directly for unnamed ones.

use std::borrow::Cow;

use ai_core::{Blackboard, TickContext, WorldMut};

use crate::bt::BtNode;
use crate::nodes::{
    ActionNode, ConditionNode, ConditionOutput, Cooldown, Inverter, LeafOutput, Selector,
    Sequence, Succeeder,
};

#[inline]
pub fn sequence<W>(
    name: impl Into<Cow<'static, str>>,
    children: Vec<Box<dyn BtNode<W>>>,
) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Sequence::new(children).named(name))
}

#[inline]
pub fn selector<W>(
    name: impl Into<Cow<'static, str>>,
    children: Vec<Box<dyn BtNode<W>>>,
) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Selector::new(children).named(name))
}

#[inline]
pub fn action<W, F, R>(name: impl Into<Cow<'static, str>>, callback: F) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
    F: FnMut(&TickContext, &mut W::Actor, &mut W, &mut Blackboard) -> R + 'static,
    R: Into<LeafOutput>,
{
    Box::new(ActionNode::new(callback).named(name))
}

#[inline]
pub fn condition<W, F, R>(name: impl Into<Cow<'static, str>>, predicate: F) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
    F: FnMut(&TickContext, &mut W::Actor, &mut W, &mut Blackboard) -> R + 'static,
    R: Into<ConditionOutput>,
{
    Box::new(ConditionNode::new(predicate).named(name))
}

#[inline]
pub fn inverter<W>(child: Box<dyn BtNode<W>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Inverter::new(child))
}

#[inline]
pub fn succeeder<W>(child: Box<dyn BtNode<W>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Succeeder::new(child))
}

#[inline]
pub fn cooldown<W>(
    name: impl Into<Cow<'static, str>>,
    duration_hours: f64,
    child: Box<dyn BtNode<W>>,
) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Cooldown::new(duration_hours, child, name))
}
