/// Piece of a comment line: literal text or a numbered placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Tab stop `index` pre-filled with `default`; index 0 is the final stop
    Field { index: usize, default: String },
}

/// Body of one comment line, without comment markers or indentation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateLine {
    segments: Vec<Segment>,
}

impl TemplateLine {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::blank().with_text(text)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment::Text(text));
        }
        self
    }

    pub fn with_field(mut self, field: Segment) -> Self {
        self.segments.push(field);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Hands out tab-stop indices in emission order, starting at 1
#[derive(Debug)]
pub struct TabStops {
    next: usize,
}

impl Default for TabStops {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl TabStops {
    pub fn next_field(&mut self, default: impl Into<String>) -> Segment {
        let index = self.next;
        self.next += 1;
        Segment::Field {
            index,
            default: default.into(),
        }
    }

    /// The free-form stop the cursor lands on last
    pub fn final_field() -> Segment {
        Segment::Field {
            index: 0,
            default: String::new(),
        }
    }
}

/// A comment ready for rendering, anchored above `insertion_line`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTemplate {
    pub insertion_line: usize,
    /// Visual indentation in columns
    pub indent: usize,
    pub lines: Vec<TemplateLine>,
}

impl CommentTemplate {
    /// Tab-stop indices in the order they appear
    pub fn field_indices(&self) -> Vec<usize> {
        self.lines
            .iter()
            .flat_map(|line| line.segments())
            .filter_map(|segment| match segment {
                Segment::Field { index, .. } => Some(*index),
                Segment::Text(_) => None,
            })
            .collect()
    }
}
