//! 支持 decrease-key 的索引最小堆
//!
//! 二叉堆数组保存队列项，另有一个按顶点下标索引的位置数组，
//! 记录每个顶点当前所在的堆槽位。每次交换都同步更新位置数组，
//! 因此成员判断为 O(1)，降低优先级为 O(log n)。

use crate::error::{Error, Result};

/// 队列项：顶点及其当前已知的最短连接距离
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueItem {
    pub vertex: usize,
    pub distance: f64,
}

/// 以顶点下标为键的最小优先队列
///
/// 每个顶点同一时刻最多只有一个存活项。距离相等时不交换，
/// 所以对固定的插入顺序，弹出顺序是确定的。
#[derive(Debug, Clone, Default)]
pub struct IndexedPriorityQueue {
    heap: Vec<QueueItem>,
    /// positions[vertex] = 该顶点在 heap 中的槽位
    positions: Vec<Option<usize>>,
}

impl IndexedPriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为 `vertices` 个顶点预分配空间
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            heap: Vec::with_capacity(vertices),
            positions: vec![None; vertices],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.slot_of(vertex).is_some()
    }

    /// 顶点在队列中的当前距离
    pub fn distance_of(&self, vertex: usize) -> Option<f64> {
        self.slot_of(vertex).map(|slot| self.heap[slot].distance)
    }

    /// 最小项，不移除
    pub fn peek(&self) -> Option<&QueueItem> {
        self.heap.first()
    }

    /// 插入新项；顶点已有存活项时返回 [`Error::DuplicateQueueInsert`]
    pub fn push(&mut self, vertex: usize, distance: f64) -> Result<()> {
        if self.contains(vertex) {
            return Err(Error::DuplicateQueueInsert { vertex });
        }
        self.insert(vertex, distance);
        Ok(())
    }

    /// 顶点已在队列中时，仅当新距离严格更小才更新；否则插入新项
    ///
    /// 返回队列是否发生了变化。
    pub fn decrease_or_insert(&mut self, vertex: usize, distance: f64) -> bool {
        match self.slot_of(vertex) {
            Some(slot) => {
                if distance < self.heap[slot].distance {
                    self.heap[slot].distance = distance;
                    self.sift_up(slot);
                    true
                } else {
                    false
                }
            }
            None => {
                self.insert(vertex, distance);
                true
            }
        }
    }

    /// 移除并返回距离最小的项；队列为空时返回 [`Error::QueueUnderflow`]
    pub fn pop_min(&mut self) -> Result<QueueItem> {
        if self.heap.is_empty() {
            return Err(Error::QueueUnderflow);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop().ok_or(Error::QueueUnderflow)?;
        self.positions[item.vertex] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    // ========================================================================
    // 内部方法
    // ========================================================================

    fn insert(&mut self, vertex: usize, distance: f64) {
        if vertex >= self.positions.len() {
            self.positions.resize(vertex + 1, None);
        }
        let slot = self.heap.len();
        self.heap.push(QueueItem { vertex, distance });
        self.positions[vertex] = Some(slot);
        self.sift_up(slot);
    }

    fn slot_of(&self, vertex: usize) -> Option<usize> {
        self.positions.get(vertex).copied().flatten()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].distance < self.heap[b].distance
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].vertex] = Some(a);
        self.positions[self.heap[b].vertex] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> bool {
        let heap_ordered = (1..self.heap.len()).all(|i| !self.less(i, (i - 1) / 2));
        let positions_consistent = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, item)| self.positions[item.vertex] == Some(slot));
        let live = self.positions.iter().filter(|p| p.is_some()).count();
        heap_ordered && positions_consistent && live == self.heap.len()
    }
}
