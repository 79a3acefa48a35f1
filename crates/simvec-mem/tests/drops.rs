use std::{cell::Cell, rc::Rc};

use simvec_mem::{dynamic_array, GlobalArray};

#[derive(Clone)]
struct Counted {
    drops: Rc<Cell<usize>>,
}

impl Drop for Counted {

    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn counted(drops: &Rc<Cell<usize>>) -> Counted {
    Counted { drops: drops.clone() }
}

#[test]
fn growth_moves_without_dropping() {
    let drops = Rc::new(Cell::new(0));
    let mut arr = GlobalArray::new();
    for _ in 0..33 {
        arr.push_back(counted(&drops)).unwrap();
    }
    arr.insert(10, counted(&drops)).unwrap();
    arr.reserve(200).unwrap();
    assert_eq!(drops.get(), 0);
    drop(arr);
    assert_eq!(drops.get(), 34);
}

#[test]
fn take_then_drop_both_is_balanced() {
    let drops = Rc::new(Cell::new(0));
    let mut a: GlobalArray<_> = (0..4).map(|_| counted(&drops)).collect();
    let b = a.take();
    drop(a);
    assert_eq!(drops.get(), 0);
    drop(b);
    assert_eq!(drops.get(), 4);
}

#[test]
fn shrinking_paths_drop_exactly_removed() {
    let drops = Rc::new(Cell::new(0));
    let mut arr: GlobalArray<_> = (0..10).map(|_| counted(&drops)).collect();
    arr.truncate(8);
    assert_eq!(drops.get(), 2);
    arr.resize_with(5, || counted(&drops)).unwrap();
    assert_eq!(drops.get(), 5);
    let popped = arr.pop_back();
    assert_eq!(drops.get(), 5);
    drop(popped);
    assert_eq!(drops.get(), 6);
    arr.erase(0);
    assert_eq!(drops.get(), 7);
    arr.clear();
    assert_eq!(drops.get(), 10);
}

#[test]
fn assignment_drops_previous_contents() {
    let drops = Rc::new(Cell::new(0));
    let source = dynamic_array![counted(&drops), counted(&drops)].unwrap();
    let mut target = dynamic_array![counted(&drops), counted(&drops), counted(&drops)].unwrap();
    target.assign_from(&source).unwrap();
    assert_eq!(drops.get(), 3);
    drop((source, target));
    assert_eq!(drops.get(), 7);
}
