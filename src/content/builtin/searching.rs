//! Searching algorithms.

use super::{category, topic_page};
use crate::content::raw::{RawApproach, RawEntry, RawPage, RawStep};

pub(super) fn page() -> RawPage {
    topic_page(
        "searching",
        "Searching",
        "Binary search and the problems that reduce to it",
        vec![
            category(
                "binary-search",
                "Binary Search",
                vec![classic(), first_and_last(), rotated()],
            ),
            category("advanced", "Advanced", vec![median_of_two(), search_on_answer()]),
        ],
    )
}

fn classic() -> RawEntry {
    RawEntry::new(
        "Classic Binary Search",
        "Easy",
        "Find the index of a target in a sorted array, or -1.",
    )
    .solutions([
        (
            "C++",
            r#"int binarySearch(const std::vector<int>& a, int target) {
    int lo = 0, hi = (int)a.size() - 1;
    while (lo <= hi) {
        int mid = lo + (hi - lo) / 2;
        if (a[mid] == target) return mid;
        if (a[mid] < target) lo = mid + 1;
        else hi = mid - 1;
    }
    return -1;
}"#,
        ),
        (
            "Java",
            r#"int binarySearch(int[] a, int target) {
    int lo = 0, hi = a.length - 1;
    while (lo <= hi) {
        int mid = lo + (hi - lo) / 2;
        if (a[mid] == target) return mid;
        if (a[mid] < target) lo = mid + 1;
        else hi = mid - 1;
    }
    return -1;
}"#,
        ),
        (
            "Python",
            r#"def binary_search(a, target):
    lo, hi = 0, len(a) - 1
    while lo <= hi:
        mid = (lo + hi) // 2
        if a[mid] == target:
            return mid
        if a[mid] < target:
            lo = mid + 1
        else:
            hi = mid - 1
    return -1"#,
        ),
    ])
    .explanation(
        "The closed interval [lo, hi] always contains the target if it is present. \
         `lo + (hi - lo) / 2` avoids integer overflow.",
    )
    .approach(
        RawApproach::new([
            RawStep::new("Define the interval", "Search the closed range [0, n - 1].")
                .keywords(["loop invariant"]),
            RawStep::new("Probe the middle", "Compare a[mid] with the target.").details([
                "Equal: done",
                "Smaller: the target can only be right of mid",
                "Larger: the target can only be left of mid",
            ]),
            RawStep::new("Stop when empty", "lo > hi means the interval is empty and the target absent."),
        ])
        .pattern("Halving the search space")
        .complexity("O(log n)", "O(1)"),
    )
}

fn first_and_last() -> RawEntry {
    RawEntry::new(
        "First and Last Position",
        "Medium",
        "Find the first and last index of a target in a sorted array with duplicates.",
    )
    .solutions([
        (
            "Python",
            r#"def lower_bound(a, target):
    lo, hi = 0, len(a)
    while lo < hi:
        mid = (lo + hi) // 2
        if a[mid] < target:
            lo = mid + 1
        else:
            hi = mid
    return lo

def search_range(a, target):
    first = lower_bound(a, target)
    if first == len(a) or a[first] != target:
        return [-1, -1]
    return [first, lower_bound(a, target + 1) - 1]"#,
        ),
        (
            "C++",
            r#"std::vector<int> searchRange(std::vector<int>& a, int target) {
    auto first = std::lower_bound(a.begin(), a.end(), target);
    if (first == a.end() || *first != target) return {-1, -1};
    auto last = std::upper_bound(a.begin(), a.end(), target);
    return {int(first - a.begin()), int(last - a.begin()) - 1};
}"#,
        ),
    ])
    .explanation("Two boundary searches on the half-open interval [lo, hi) instead of one exact match.")
}

fn rotated() -> RawEntry {
    RawEntry::new(
        "Search in Rotated Sorted Array",
        "Medium",
        "Find a target in a sorted array that was rotated at an unknown pivot.",
    )
    .solutions([
        (
            "Java",
            r#"int search(int[] a, int target) {
    int lo = 0, hi = a.length - 1;
    while (lo <= hi) {
        int mid = (lo + hi) >>> 1;
        if (a[mid] == target) return mid;
        if (a[lo] <= a[mid]) {
            if (a[lo] <= target && target < a[mid]) hi = mid - 1;
            else lo = mid + 1;
        } else {
            if (a[mid] < target && target <= a[hi]) lo = mid + 1;
            else hi = mid - 1;
        }
    }
    return -1;
}"#,
        ),
        (
            "Python",
            r#"def search(a, target):
    lo, hi = 0, len(a) - 1
    while lo <= hi:
        mid = (lo + hi) // 2
        if a[mid] == target:
            return mid
        if a[lo] <= a[mid]:
            if a[lo] <= target < a[mid]:
                hi = mid - 1
            else:
                lo = mid + 1
        else:
            if a[mid] < target <= a[hi]:
                lo = mid + 1
            else:
                hi = mid - 1
    return -1"#,
        ),
    ])
    .explanation("At least one half around mid is always sorted; test whether the target lies in it.")
    .approach(
        RawApproach::new([
            RawStep::new("Find the sorted half", "Compare a[lo] with a[mid].")
                .keywords(["pivot", "sorted half"]),
            RawStep::new(
                "Range check",
                "If the target lies within the sorted half, search there; otherwise search the other half.",
            ),
        ])
        .pattern("Modified binary search")
        .complexity("O(log n)", "O(1)"),
    )
}

fn median_of_two() -> RawEntry {
    RawEntry::new(
        "Median of Two Sorted Arrays",
        "Hard",
        "Find the median of two sorted arrays in logarithmic time.",
    )
    .solutions([
        (
            "Python",
            r#"def find_median(a, b):
    if len(a) > len(b):
        a, b = b, a
    m, n = len(a), len(b)
    half = (m + n + 1) // 2
    lo, hi = 0, m
    while lo <= hi:
        i = (lo + hi) // 2
        j = half - i
        a_left = a[i - 1] if i > 0 else float("-inf")
        a_right = a[i] if i < m else float("inf")
        b_left = b[j - 1] if j > 0 else float("-inf")
        b_right = b[j] if j < n else float("inf")
        if a_left <= b_right and b_left <= a_right:
            if (m + n) % 2:
                return max(a_left, b_left)
            return (max(a_left, b_left) + min(a_right, b_right)) / 2
        if a_left > b_right:
            hi = i - 1
        else:
            lo = i + 1"#,
        ),
        (
            "C++",
            r#"double findMedian(std::vector<int>& a, std::vector<int>& b) {
    if (a.size() > b.size()) return findMedian(b, a);
    int m = a.size(), n = b.size(), half = (m + n + 1) / 2;
    int lo = 0, hi = m;
    while (lo <= hi) {
        int i = (lo + hi) / 2, j = half - i;
        int aL = i > 0 ? a[i - 1] : INT_MIN, aR = i < m ? a[i] : INT_MAX;
        int bL = j > 0 ? b[j - 1] : INT_MIN, bR = j < n ? b[j] : INT_MAX;
        if (aL <= bR && bL <= aR) {
            if ((m + n) % 2) return std::max(aL, bL);
            return (std::max(aL, bL) + std::min(aR, bR)) / 2.0;
        }
        if (aL > bR) hi = i - 1;
        else lo = i + 1;
    }
    return 0.0;
}"#,
        ),
    ])
    .explanation(
        "Binary search over the cut position in the shorter array. A cut is valid when \
         everything left of both cuts is no larger than everything right of them.",
    )
    .approach(
        RawApproach::new([
            RawStep::new("Search the shorter array", "Keeps the cut in the longer array in range.")
                .keywords(["partition"]),
            RawStep::new("Pair the cuts", "Cutting a at i forces b to be cut at half - i."),
            RawStep::new("Check the cross condition", "a_left ≤ b_right and b_left ≤ a_right.")
                .details([
                    "a_left too large: move the cut left",
                    "b_left too large: move the cut right",
                ])
                .keywords(["sentinels"]),
            RawStep::new("Read the median", "Odd total: max of the lefts. Even: average of the middle pair."),
        ])
        .pattern("Binary search on a partition")
        .complexity("O(log min(m, n))", "O(1)"),
    )
}

fn search_on_answer() -> RawEntry {
    RawEntry::new(
        "Binary Search on the Answer",
        "Medium",
        "Find the minimum eating speed that finishes all piles within h hours.",
    )
    .solutions([
        (
            "Python",
            r#"def min_speed(piles, h):
    lo, hi = 1, max(piles)
    while lo < hi:
        k = (lo + hi) // 2
        if sum((p + k - 1) // k for p in piles) <= h:
            hi = k
        else:
            lo = k + 1
    return lo"#,
        ),
        (
            "Java",
            r#"int minSpeed(int[] piles, int h) {
    int lo = 1, hi = Arrays.stream(piles).max().getAsInt();
    while (lo < hi) {
        int k = lo + (hi - lo) / 2;
        long hours = 0;
        for (int p : piles) hours += (p + k - 1) / k;
        if (hours <= h) hi = k;
        else lo = k + 1;
    }
    return lo;
}"#,
        ),
    ])
    .explanation("Feasibility is monotone in the speed, so binary search the smallest feasible value.")
    .approach(RawApproach::new([
        RawStep::new("Bound the answer", "Speed 1 is the slowest, the largest pile the fastest useful speed."),
        RawStep::new("Test feasibility", "Sum the ceil(p / k) hours for a candidate speed k.")
            .keywords(["monotone predicate"]),
        RawStep::new("Shrink", "Feasible speeds move hi down; infeasible ones move lo up."),
    ]))
}
