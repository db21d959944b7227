//! 并查集
//!
//! 并查集状态（父指针、秩）内嵌在顶点中，`DisjointSet` 是其上的可变视图。
//! 集合父指针与生成树父指针是两个独立字段。

use crate::graph::{Vertex, VertexId};
use std::cmp::Ordering;

/// 顶点数组上的并查集视图
pub struct DisjointSet<'a, T> {
    vertices: &'a mut [Vertex<T>],
}

impl<'a, T> DisjointSet<'a, T> {
    /// 将每个顶点初始化为单元素集合，并按数组顺序分配序号
    pub fn new(vertices: &'a mut [Vertex<T>]) -> Self {
        for (tag, v) in vertices.iter_mut().enumerate() {
            v.set_parent = v.id();
            v.rank = 0;
            v.tag = tag;
        }
        Self { vertices }
    }

    /// 查找代表元，并把路径上所有顶点直接挂到代表元下
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x;
        while self.vertices[root.index()].set_parent != root {
            root = self.vertices[root.index()].set_parent;
        }

        let mut current = x;
        while current != root {
            let next = self.vertices[current.index()].set_parent;
            self.vertices[current.index()].set_parent = root;
            current = next;
        }

        root
    }

    /// 按秩合并；已在同一集合时返回 false
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        let rank_x = self.vertices[rx.index()].rank;
        let rank_y = self.vertices[ry.index()].rank;
        match rank_x.cmp(&rank_y) {
            Ordering::Greater => self.vertices[ry.index()].set_parent = rx,
            Ordering::Less => self.vertices[rx.index()].set_parent = ry,
            Ordering::Equal => {
                self.vertices[rx.index()].set_parent = ry;
                self.vertices[ry.index()].rank += 1;
            }
        }
        true
    }

    /// 初始化时分配的顶点序号
    pub fn tag(&self, x: VertexId) -> usize {
        self.vertices[x.index()].tag
    }

    pub fn same_set(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }

    /// 当前集合个数
    pub fn root_count(&self) -> usize {
        self.vertices
            .iter()
            .filter(|v| v.set_parent == v.id())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn graph_with(n: u32) -> Graph<u32> {
        let mut graph = Graph::new();
        for i in 0..n {
            graph.add_vertex(i).unwrap();
        }
        graph
    }

    #[test]
    fn test_make_set() {
        let mut graph = graph_with(4);
        let set = DisjointSet::new(&mut graph.vertices);

        assert_eq!(set.root_count(), 4);
        for (i, v) in graph.vertex_set().iter().enumerate() {
            assert_eq!(v.tag, i);
            assert_eq!(v.set_parent, v.id());
        }
    }

    #[test]
    fn test_union_and_find() {
        let mut graph = graph_with(5);
        let mut set = DisjointSet::new(&mut graph.vertices);
        let id = VertexId::new;

        assert!(set.union(id(0), id(1)));
        assert!(set.union(id(2), id(3)));
        assert!(set.same_set(id(0), id(1)));
        assert!(!set.same_set(id(1), id(2)));

        assert!(set.union(id(1), id(3)));
        assert!(!set.union(id(0), id(2)));
        assert!(set.same_set(id(0), id(3)));
        assert_eq!(set.root_count(), 2);
    }

    #[test]
    fn test_root_count_after_k_unions() {
        let mut graph = graph_with(10);
        let mut set = DisjointSet::new(&mut graph.vertices);

        let mut unions = 0;
        for i in 0..6 {
            if set.union(VertexId::new(i), VertexId::new(i + 1)) {
                unions += 1;
            }
        }

        assert_eq!(unions, 6);
        assert_eq!(set.root_count(), 10 - unions);
    }

    #[test]
    fn test_union_by_rank() {
        let mut graph = graph_with(3);
        {
            let mut set = DisjointSet::new(&mut graph.vertices);
            set.union(VertexId::new(0), VertexId::new(1));
            set.union(VertexId::new(2), VertexId::new(0));
        }

        // 0 与 1 同秩，1 成为根且秩为 1；2 的秩较低，挂到 1 下
        let root = &graph.vertex_set()[1];
        assert_eq!(root.rank, 1);
        assert_eq!(graph.vertex_set()[2].set_parent, VertexId::new(1));
    }

    #[test]
    fn test_path_compression() {
        let mut graph = graph_with(4);
        {
            let mut set = DisjointSet::new(&mut graph.vertices);
            set.union(VertexId::new(0), VertexId::new(1));
            set.union(VertexId::new(2), VertexId::new(3));
            set.union(VertexId::new(1), VertexId::new(3));
            set.find(VertexId::new(0));
        }

        let root = graph.vertex_set()[3].id();
        assert_eq!(graph.vertex_set()[0].set_parent, root);
    }
}
