#[derive(Debug, Copy, Clone)]
pub struct BenchCase {
    name: &'static str,
    group: BenchGroup,
    size: usize,
}

impl BenchCase {
    pub fn new(name: &'static str, group: BenchGroup, size: usize) -> Self {
        Self { name, group, size }
    }

    pub fn small(name: &'static str) -> Self {
        Self::new(name, BenchGroup::Small, BenchGroup::Small.size())
    }

    pub fn normal(name: &'static str) -> Self {
        Self::new(name, BenchGroup::Normal, BenchGroup::Normal.size())
    }

    pub fn large(name: &'static str) -> Self {
        Self::new(name, BenchGroup::Large, BenchGroup::Large.size())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> BenchGroup {
        self.group
    }

    /// number of items, arguments or calls the case works on
    pub fn size(&self) -> usize {
        self.size
    }
}

#[derive(Clone, Copy, Debug)]
pub enum BenchGroup {
    Small,
    Normal,
    Large,
}

impl BenchGroup {
    pub const fn size(self) -> usize {
        match self {
            BenchGroup::Small => 4,
            BenchGroup::Normal => 64,
            BenchGroup::Large => 4096,
        }
    }
}
