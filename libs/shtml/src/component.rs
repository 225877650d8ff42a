//! Components and the slot markers that decide where they may go.
//!
//! A component renders itself by appending to (or, for attribute
//! injectors, editing) the one output buffer of the document being
//! built. Child lists are tuples, arrays or options of components and
//! render their members in order.

/// Something that can be written into a document.
pub trait Component {
    fn render(&self, out: &mut String);
}

/// Components allowed inside `<head>`.
pub trait HeadContent: Component {}

/// Components allowed inside `<body>` and inside every element.
pub trait BodyContent: Component {}

/// Slot marker: body only.
#[derive(Debug, Clone, Copy)]
pub struct BodySlot;

/// Slot marker: head only.
#[derive(Debug, Clone, Copy)]
pub struct HeadSlot;

/// Slot marker: head or body.
#[derive(Debug, Clone, Copy)]
pub struct AnySlot;


impl Component for () {
    fn render(&self, _out: &mut String) {}
}
impl HeadContent for () {}
impl BodyContent for () {}

macro_rules! impl_tuple_component {
    ($($name:ident),+) => {
        impl<$($name: Component),+> Component for ($($name,)+) {
            #[allow(non_snake_case)]
            fn render(&self, out: &mut String) {
                let ($($name,)+) = self;
                $( $name.render(out); )+
            }
        }
        impl<$($name: HeadContent),+> HeadContent for ($($name,)+) {}
        impl<$($name: BodyContent),+> BodyContent for ($($name,)+) {}
    }
}

impl_tuple_component!(A);
impl_tuple_component!(A, B);
impl_tuple_component!(A, B, C);
impl_tuple_component!(A, B, C, D);
impl_tuple_component!(A, B, C, D, E);
impl_tuple_component!(A, B, C, D, E, F);
impl_tuple_component!(A, B, C, D, E, F, G);
impl_tuple_component!(A, B, C, D, E, F, G, H);
impl_tuple_component!(A, B, C, D, E, F, G, H, I);
impl_tuple_component!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_component!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_component!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_tuple_component!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_tuple_component!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_tuple_component!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_tuple_component!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

impl<T: Component, const N: usize> Component for [T; N] {
    fn render(&self, out: &mut String) {
        for c in self {
            c.render(out);
        }
    }
}
impl<T: HeadContent, const N: usize> HeadContent for [T; N] {}
impl<T: BodyContent, const N: usize> BodyContent for [T; N] {}

impl<T: Component> Component for Option<T> {
    fn render(&self, out: &mut String) {
        if let Some(c) = self {
            c.render(out);
        }
    }
}
impl<T: HeadContent> HeadContent for Option<T> {}
impl<T: BodyContent> BodyContent for Option<T> {}

impl<T: Component + ?Sized> Component for &T {
    fn render(&self, out: &mut String) {
        (**self).render(out)
    }
}
impl<T: HeadContent + ?Sized> HeadContent for &T {}
impl<T: BodyContent + ?Sized> BodyContent for &T {}


/// Verbatim text. Nothing is escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text(pub &'static str);

pub fn text(s: &'static str) -> Text {
    Text(s)
}

impl Component for Text {
    fn render(&self, out: &mut String) {
        out.push_str(self.0);
    }
}
impl HeadContent for Text {}
impl BodyContent for Text {}

/// `<!--` children `-->`
#[derive(Debug, Clone)]
pub struct Comment<C>(C);

pub fn comment<C: Component>(children: C) -> Comment<C> {
    Comment(children)
}

impl<C: Component> Component for Comment<C> {
    fn render(&self, out: &mut String) {
        out.push_str("<!--");
        self.0.render(out);
        out.push_str("-->");
    }
}
impl<C: Component> HeadContent for Comment<C> {}
impl<C: Component> BodyContent for Comment<C> {}
