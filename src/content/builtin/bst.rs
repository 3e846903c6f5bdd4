//! Binary search trees.

use super::{category, topic_page};
use crate::content::raw::{RawApproach, RawEntry, RawPage, RawStep};

pub(super) fn page() -> RawPage {
    topic_page(
        "bst",
        "Binary Search Trees",
        "Ordered trees where every left subtree holds smaller keys and every right subtree larger ones",
        vec![
            category("fundamentals", "Fundamentals", vec![search(), inorder()]),
            category("operations", "Operations", vec![insert(), delete(), validate()]),
            category("balancing", "Balancing", vec![avl_rotations(), balanced_check()]),
        ],
    )
}

fn search() -> RawEntry {
    RawEntry::new(
        "Search for a Key",
        "Easy",
        "Return the node holding a given key, or nothing if the key is absent.",
    )
    .solutions([
        (
            "C++",
            r#"TreeNode* search(TreeNode* root, int key) {
    while (root && root->val != key) {
        root = key < root->val ? root->left : root->right;
    }
    return root;
}"#,
        ),
        (
            "Java",
            r#"TreeNode search(TreeNode root, int key) {
    while (root != null && root.val != key) {
        root = key < root.val ? root.left : root.right;
    }
    return root;
}"#,
        ),
        (
            "Python",
            r#"def search(root, key):
    while root and root.val != key:
        root = root.left if key < root.val else root.right
    return root"#,
        ),
    ])
    .explanation(
        "The ordering property lets each comparison discard one whole subtree, \
         so the walk follows a single root-to-leaf path.",
    )
    .approach(
        RawApproach::new([
            RawStep::new("Start at the root", "The root is the only entry point into the tree.")
                .keywords(["root"]),
            RawStep::new(
                "Compare and descend",
                "Move left when the key is smaller than the current value, right when larger.",
            )
            .details([
                "Equal keys end the search immediately",
                "A null child means the key is not present",
            ])
            .keywords(["comparison", "ordering invariant"]),
            RawStep::new("Return", "Return the node that stopped the loop, which may be null."),
        ])
        .pattern("Divide by ordering")
        .complexity("O(h), O(log n) when balanced", "O(1) iterative"),
    )
}

fn inorder() -> RawEntry {
    RawEntry::new(
        "Inorder Traversal",
        "Easy",
        "Visit every key of a BST in ascending order.",
    )
    .solution(
        "Python",
        r#"def inorder(root):
    stack, out = [], []
    node = root
    while stack or node:
        while node:
            stack.append(node)
            node = node.left
        node = stack.pop()
        out.append(node.val)
        node = node.right
    return out"#,
    )
    .explanation(
        "Left subtree, node, right subtree. On a BST this yields the keys sorted; \
         the explicit stack replaces the call stack of the recursive version.",
    )
}

fn insert() -> RawEntry {
    RawEntry::new(
        "Insert a Key",
        "Easy",
        "Insert a new key while preserving the BST ordering property.",
    )
    .solutions([
        (
            "C++",
            r#"TreeNode* insert(TreeNode* root, int key) {
    if (!root) return new TreeNode(key);
    if (key < root->val)
        root->left = insert(root->left, key);
    else if (key > root->val)
        root->right = insert(root->right, key);
    return root;
}"#,
        ),
        (
            "Java",
            r#"TreeNode insert(TreeNode root, int key) {
    if (root == null) return new TreeNode(key);
    if (key < root.val) root.left = insert(root.left, key);
    else if (key > root.val) root.right = insert(root.right, key);
    return root;
}"#,
        ),
        (
            "Python",
            r#"def insert(root, key):
    if root is None:
        return TreeNode(key)
    if key < root.val:
        root.left = insert(root.left, key)
    elif key > root.val:
        root.right = insert(root.right, key)
    return root"#,
        ),
    ])
    .explanation(
        "Search for the key; the null link where the search falls off the tree \
         is exactly where the new leaf belongs. Duplicates are ignored.",
    )
}

fn delete() -> RawEntry {
    RawEntry::new(
        "Delete a Key",
        "Medium",
        "Remove a key from a BST and return the new root.",
    )
    .solutions([
        (
            "C++",
            r#"TreeNode* remove(TreeNode* root, int key) {
    if (!root) return nullptr;
    if (key < root->val) {
        root->left = remove(root->left, key);
    } else if (key > root->val) {
        root->right = remove(root->right, key);
    } else {
        if (!root->left) return root->right;
        if (!root->right) return root->left;
        TreeNode* succ = root->right;
        while (succ->left) succ = succ->left;
        root->val = succ->val;
        root->right = remove(root->right, succ->val);
    }
    return root;
}"#,
        ),
        (
            "Python",
            r#"def remove(root, key):
    if root is None:
        return None
    if key < root.val:
        root.left = remove(root.left, key)
    elif key > root.val:
        root.right = remove(root.right, key)
    else:
        if root.left is None:
            return root.right
        if root.right is None:
            return root.left
        succ = root.right
        while succ.left:
            succ = succ.left
        root.val = succ.val
        root.right = remove(root.right, succ.val)
    return root"#,
        ),
    ])
    .default_variant("Python")
    .explanation(
        "Leaves and single-child nodes are spliced out directly. A node with two \
         children takes the value of its inorder successor, which is then deleted \
         from the right subtree.",
    )
    .approach(
        RawApproach::new([
            RawStep::new("Locate the node", "Descend exactly as in search.")
                .keywords(["search"]),
            RawStep::new("Classify", "Count the children of the node being removed.").details([
                "No children: return null to the parent",
                "One child: return that child to the parent",
                "Two children: replace with the inorder successor",
            ]),
            RawStep::new(
                "Remove the successor",
                "The successor has no left child, so deleting it is always one of the easy cases.",
            )
            .keywords(["inorder successor", "recursion"]),
        ])
        .pattern("Recursive rebuild of parent links")
        .complexity("O(h)", "O(h) recursion"),
    )
}

fn validate() -> RawEntry {
    RawEntry::new(
        "Validate a BST",
        "Medium",
        "Decide whether a binary tree satisfies the BST property at every node.",
    )
    .solutions([
        (
            "Java",
            r#"boolean isValid(TreeNode node, Long lo, Long hi) {
    if (node == null) return true;
    if ((lo != null && node.val <= lo) || (hi != null && node.val >= hi))
        return false;
    return isValid(node.left, lo, (long) node.val)
        && isValid(node.right, (long) node.val, hi);
}"#,
        ),
        (
            "Python",
            r#"def is_valid(node, lo=float("-inf"), hi=float("inf")):
    if node is None:
        return True
    if not lo < node.val < hi:
        return False
    return is_valid(node.left, lo, node.val) and is_valid(node.right, node.val, hi)"#,
        ),
    ])
    .explanation(
        "Checking only parent/child pairs is not enough: every node must lie inside \
         the open interval inherited from all of its ancestors.",
    )
    .approach(
        RawApproach::new([
            RawStep::new("Carry bounds", "Pass the allowed (low, high) interval down the recursion.")
                .keywords(["bounds", "interval"]),
            RawStep::new("Tighten", "Going left caps the high bound; going right raises the low bound."),
        ])
        .complexity("O(n)", "O(h)"),
    )
}

fn avl_rotations() -> RawEntry {
    RawEntry::new(
        "AVL Rotations",
        "Hard",
        "Restore balance after an insertion using single and double rotations.",
    )
    .solutions([
        (
            "C++",
            r#"int height(Node* n) { return n ? n->height : 0; }

void update(Node* n) {
    n->height = 1 + std::max(height(n->left), height(n->right));
}

Node* rotateRight(Node* y) {
    Node* x = y->left;
    y->left = x->right;
    x->right = y;
    update(y);
    update(x);
    return x;
}

Node* rotateLeft(Node* x) {
    Node* y = x->right;
    x->right = y->left;
    y->left = x;
    update(x);
    update(y);
    return y;
}

Node* rebalance(Node* n) {
    update(n);
    int balance = height(n->left) - height(n->right);
    if (balance > 1) {
        if (height(n->left->left) < height(n->left->right))
            n->left = rotateLeft(n->left);
        return rotateRight(n);
    }
    if (balance < -1) {
        if (height(n->right->right) < height(n->right->left))
            n->right = rotateRight(n->right);
        return rotateLeft(n);
    }
    return n;
}"#,
        ),
        (
            "Python",
            r#"def height(n):
    return n.height if n else 0

def update(n):
    n.height = 1 + max(height(n.left), height(n.right))

def rotate_right(y):
    x = y.left
    y.left, x.right = x.right, y
    update(y)
    update(x)
    return x

def rotate_left(x):
    y = x.right
    x.right, y.left = y.left, x
    update(x)
    update(y)
    return y

def rebalance(n):
    update(n)
    balance = height(n.left) - height(n.right)
    if balance > 1:
        if height(n.left.left) < height(n.left.right):
            n.left = rotate_left(n.left)
        return rotate_right(n)
    if balance < -1:
        if height(n.right.right) < height(n.right.left):
            n.right = rotate_right(n.right)
        return rotate_left(n)
    return n"#,
        ),
    ])
    .explanation(
        "After each insertion, walk back up and rebalance. Left-Left and Right-Right \
         cases need one rotation; Left-Right and Right-Left first rotate the child \
         to reduce to a single case.",
    )
    .approach(
        RawApproach::new([
            RawStep::new("Track heights", "Store the height in every node and refresh it bottom-up.")
                .keywords(["height", "balance factor"]),
            RawStep::new(
                "Detect imbalance",
                "A balance factor outside [-1, 1] marks the lowest unbalanced ancestor.",
            ),
            RawStep::new("Pick the case", "Compare the heights of the heavy child's subtrees.")
                .details([
                    "LL: rotate right",
                    "RR: rotate left",
                    "LR: rotate child left, then node right",
                    "RL: rotate child right, then node left",
                ])
                .keywords(["LL", "RR", "LR", "RL"]),
            RawStep::new("Rotate", "Each rotation is O(1) and preserves the inorder sequence.")
                .keywords(["rotation"]),
        ])
        .pattern("Local restructuring to maintain a global invariant")
        .complexity("O(log n) per insert", "O(1) per rotation"),
    )
}

fn balanced_check() -> RawEntry {
    RawEntry::new(
        "Height-Balanced Check",
        "Easy",
        "Decide whether no node's subtrees differ in height by more than one.",
    )
    .solutions([
        (
            "Python",
            r#"def balanced(root):
    def depth(node):
        if node is None:
            return 0
        left, right = depth(node.left), depth(node.right)
        if left < 0 or right < 0 or abs(left - right) > 1:
            return -1
        return 1 + max(left, right)
    return depth(root) >= 0"#,
        ),
        (
            "Java",
            r#"int depth(TreeNode node) {
    if (node == null) return 0;
    int l = depth(node.left), r = depth(node.right);
    if (l < 0 || r < 0 || Math.abs(l - r) > 1) return -1;
    return 1 + Math.max(l, r);
}"#,
        ),
    ])
    .explanation("A single post-order pass returns heights and uses -1 as an early-exit marker.")
}
