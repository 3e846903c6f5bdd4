//! Singly linked lists.

use super::{category, topic_page};
use crate::content::raw::{RawApproach, RawEntry, RawPage, RawStep};

pub(super) fn page() -> RawPage {
    topic_page(
        "linked-lists",
        "Linked Lists",
        "Pointer manipulation on singly linked lists",
        vec![
            category("fundamentals", "Fundamentals", vec![reverse(), merge()]),
            category(
                "two-pointers",
                "Two Pointers",
                vec![detect_cycle(), middle(), remove_nth()],
            ),
        ],
    )
}

fn reverse() -> RawEntry {
    RawEntry::new(
        "Reverse a Linked List",
        "Easy",
        "Reverse a singly linked list in place and return the new head.",
    )
    .solutions([
        (
            "C++",
            r#"ListNode* reverse(ListNode* head) {
    ListNode* prev = nullptr;
    while (head) {
        ListNode* next = head->next;
        head->next = prev;
        prev = head;
        head = next;
    }
    return prev;
}"#,
        ),
        (
            "Java",
            r#"ListNode reverse(ListNode head) {
    ListNode prev = null;
    while (head != null) {
        ListNode next = head.next;
        head.next = prev;
        prev = head;
        head = next;
    }
    return prev;
}"#,
        ),
        (
            "Python",
            r#"def reverse(head):
    prev = None
    while head:
        head.next, prev, head = prev, head, head.next
    return prev"#,
        ),
    ])
    .explanation("Each iteration flips one link. `prev` ends up at the old tail, which is the new head.")
    .approach(
        RawApproach::new([
            RawStep::new("Keep three references", "prev, current and the saved next node.")
                .keywords(["prev", "curr", "next"]),
            RawStep::new("Flip one link", "Point current back at prev before advancing.").details([
                "Save next first or the rest of the list is lost",
                "Advance prev and current together",
            ]),
            RawStep::new("Return prev", "When current is null, prev is the new head."),
        ])
        .pattern("In-place pointer reversal")
        .complexity("O(n)", "O(1)"),
    )
}

fn merge() -> RawEntry {
    RawEntry::new(
        "Merge Two Sorted Lists",
        "Easy",
        "Splice two sorted lists into one sorted list.",
    )
    .solutions([
        (
            "Java",
            r#"ListNode merge(ListNode a, ListNode b) {
    ListNode dummy = new ListNode(0), tail = dummy;
    while (a != null && b != null) {
        if (a.val <= b.val) { tail.next = a; a = a.next; }
        else { tail.next = b; b = b.next; }
        tail = tail.next;
    }
    tail.next = (a != null) ? a : b;
    return dummy.next;
}"#,
        ),
        (
            "Python",
            r#"def merge(a, b):
    dummy = tail = ListNode(0)
    while a and b:
        if a.val <= b.val:
            tail.next, a = a, a.next
        else:
            tail.next, b = b, b.next
        tail = tail.next
    tail.next = a or b
    return dummy.next"#,
        ),
    ])
    .explanation("A dummy head removes the special case for the first node.")
}

fn detect_cycle() -> RawEntry {
    RawEntry::new(
        "Detect a Cycle",
        "Medium",
        "Return the node where a cycle begins, or null when the list terminates.",
    )
    .solutions([
        (
            "C++",
            r#"ListNode* cycleStart(ListNode* head) {
    ListNode *slow = head, *fast = head;
    while (fast && fast->next) {
        slow = slow->next;
        fast = fast->next->next;
        if (slow == fast) {
            slow = head;
            while (slow != fast) {
                slow = slow->next;
                fast = fast->next;
            }
            return slow;
        }
    }
    return nullptr;
}"#,
        ),
        (
            "Python",
            r#"def cycle_start(head):
    slow = fast = head
    while fast and fast.next:
        slow, fast = slow.next, fast.next.next
        if slow is fast:
            slow = head
            while slow is not fast:
                slow, fast = slow.next, fast.next
            return slow
    return None"#,
        ),
    ])
    .explanation(
        "Floyd's tortoise and hare. Once they meet inside the cycle, a pointer \
         restarted from the head and one left at the meeting point arrive at the \
         cycle entrance together.",
    )
    .approach(
        RawApproach::new([
            RawStep::new("Race two pointers", "Slow moves one node per step, fast moves two.")
                .keywords(["tortoise", "hare"]),
            RawStep::new(
                "Detect the meeting",
                "If fast reaches null there is no cycle; if they meet there is one.",
            ),
            RawStep::new(
                "Find the entrance",
                "Reset slow to the head and advance both one step at a time.",
            )
            .details([
                "Distance head→entrance equals meeting point→entrance modulo the cycle length",
            ])
            .keywords(["modular arithmetic"]),
        ])
        .pattern("Fast & slow pointers")
        .complexity("O(n)", "O(1)"),
    )
}

fn middle() -> RawEntry {
    RawEntry::new(
        "Find the Middle Node",
        "Easy",
        "Return the middle node; for even lengths return the second middle.",
    )
    .solution(
        "Python",
        r#"def middle(head):
    slow = fast = head
    while fast and fast.next:
        slow, fast = slow.next, fast.next.next
    return slow"#,
    )
    .explanation("When fast runs off the end, slow has covered exactly half the distance.")
}

fn remove_nth() -> RawEntry {
    RawEntry::new(
        "Remove Nth Node From End",
        "Medium",
        "Remove the n-th node counted from the tail in one pass.",
    )
    .solutions([
        (
            "Java",
            r#"ListNode removeNth(ListNode head, int n) {
    ListNode dummy = new ListNode(0, head);
    ListNode lead = dummy, lag = dummy;
    for (int i = 0; i <= n; i++) lead = lead.next;
    while (lead != null) {
        lead = lead.next;
        lag = lag.next;
    }
    lag.next = lag.next.next;
    return dummy.next;
}"#,
        ),
        (
            "Python",
            r#"def remove_nth(head, n):
    dummy = ListNode(0, head)
    lead = lag = dummy
    for _ in range(n + 1):
        lead = lead.next
    while lead:
        lead, lag = lead.next, lag.next
    lag.next = lag.next.next
    return dummy.next"#,
        ),
    ])
    .explanation("Keep a gap of n + 1 nodes so the lagging pointer stops just before the target.")
    .approach(
        RawApproach::new([
            RawStep::new("Open a gap", "Advance the lead pointer n + 1 nodes from a dummy head."),
            RawStep::new("Walk together", "Move both pointers until lead falls off the list."),
            RawStep::new("Unlink", "lag.next is the node to remove."),
        ])
        .pattern("Fixed-gap two pointers"),
    )
}
