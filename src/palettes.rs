// Written by heatmap-tools palettes from matplotlib.hjson

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref MAGMA: PaletteData = PaletteData {
    name: "magma",
    rgb: vec![
      RGB{r: 0.001462, g: 0.000466, b: 0.013866},
      RGB{r: 0.002258, g: 0.001295, b: 0.018331},
      RGB{r: 0.003279, g: 0.002305, b: 0.023708},
      RGB{r: 0.004512, g: 0.003490, b: 0.029965},
      RGB{r: 0.005950, g: 0.004843, b: 0.037130},
      RGB{r: 0.007588, g: 0.006356, b: 0.044973},
      RGB{r: 0.009426, g: 0.008022, b: 0.052844},
      RGB{r: 0.011465, g: 0.009828, b: 0.060750},
      RGB{r: 0.013708, g: 0.011771, b: 0.068667},
      RGB{r: 0.016156, g: 0.013840, b: 0.076603},
      RGB{r: 0.018815, g: 0.016026, b: 0.084584},
      RGB{r: 0.021692, g: 0.018320, b: 0.092610},
      RGB{r: 0.024792, g: 0.020715, b: 0.100676},
      RGB{r: 0.028123, g: 0.023201, b: 0.108787},
      RGB{r: 0.031696, g: 0.025765, b: 0.116965},
      RGB{r: 0.035520, g: 0.028397, b: 0.125209},
      RGB{r: 0.039608, g: 0.031090, b: 0.133515},
      RGB{r: 0.043830, g: 0.033830, b: 0.141886},
      RGB{r: 0.048062, g: 0.036607, b: 0.150327},
      RGB{r: 0.052320, g: 0.039407, b: 0.158841},
      RGB{r: 0.056615, g: 0.042160, b: 0.167446},
      RGB{r: 0.060949, g: 0.044794, b: 0.176129},
      RGB{r: 0.065330, g: 0.047318, b: 0.184892},
      RGB{r: 0.069764, g: 0.049726, b: 0.193735},
      RGB{r: 0.074257, g: 0.052017, b: 0.202660},
      RGB{r: 0.078815, g: 0.054184, b: 0.211667},
      RGB{r: 0.083446, g: 0.056225, b: 0.220755},
      RGB{r: 0.088155, g: 0.058133, b: 0.229922},
      RGB{r: 0.092949, g: 0.059904, b: 0.239164},
      RGB{r: 0.097833, g: 0.061531, b: 0.248477},
      RGB{r: 0.102815, g: 0.063010, b: 0.257854},
      RGB{r: 0.107899, g: 0.064335, b: 0.267289},
      RGB{r: 0.113094, g: 0.065492, b: 0.276784},
      RGB{r: 0.118405, g: 0.066479, b: 0.286321},
      RGB{r: 0.123833, g: 0.067295, b: 0.295879},
      RGB{r: 0.129380, g: 0.067935, b: 0.305443},
      RGB{r: 0.135053, g: 0.068391, b: 0.315000},
      RGB{r: 0.140858, g: 0.068654, b: 0.324538},
      RGB{r: 0.146785, g: 0.068738, b: 0.334011},
      RGB{r: 0.152839, g: 0.068637, b: 0.343404},
      RGB{r: 0.159018, g: 0.068354, b: 0.352688},
      RGB{r: 0.165308, g: 0.067911, b: 0.361816},
      RGB{r: 0.171713, g: 0.067305, b: 0.370771},
      RGB{r: 0.178212, g: 0.066576, b: 0.379497},
      RGB{r: 0.184801, g: 0.065732, b: 0.387973},
      RGB{r: 0.191460, g: 0.064818, b: 0.396152},
      RGB{r: 0.198177, g: 0.063862, b: 0.404009},
      RGB{r: 0.204935, g: 0.062907, b: 0.411514},
      RGB{r: 0.211718, g: 0.061992, b: 0.418647},
      RGB{r: 0.218512, g: 0.061158, b: 0.425392},
      RGB{r: 0.225302, g: 0.060445, b: 0.431742},
      RGB{r: 0.232077, g: 0.059889, b: 0.437695},
      RGB{r: 0.238826, g: 0.059517, b: 0.443256},
      RGB{r: 0.245543, g: 0.059352, b: 0.448436},
      RGB{r: 0.252220, g: 0.059415, b: 0.453248},
      RGB{r: 0.258857, g: 0.059706, b: 0.457710},
      RGB{r: 0.265447, g: 0.060237, b: 0.461840},
      RGB{r: 0.271994, g: 0.060994, b: 0.465660},
      RGB{r: 0.278493, g: 0.061978, b: 0.469190},
      RGB{r: 0.284951, g: 0.063168, b: 0.472451},
      RGB{r: 0.291366, g: 0.064553, b: 0.475462},
      RGB{r: 0.297740, g: 0.066117, b: 0.478243},
      RGB{r: 0.304081, g: 0.067835, b: 0.480812},
      RGB{r: 0.310382, g: 0.069702, b: 0.483186},
      RGB{r: 0.316654, g: 0.071690, b: 0.485380},
      RGB{r: 0.322899, g: 0.073782, b: 0.487408},
      RGB{r: 0.329114, g: 0.075972, b: 0.489287},
      RGB{r: 0.335308, g: 0.078236, b: 0.491024},
      RGB{r: 0.341482, g: 0.080564, b: 0.492631},
      RGB{r: 0.347636, g: 0.082946, b: 0.494121},
      RGB{r: 0.353773, g: 0.085373, b: 0.495501},
      RGB{r: 0.359898, g: 0.087831, b: 0.496778},
      RGB{r: 0.366012, g: 0.090314, b: 0.497960},
      RGB{r: 0.372116, g: 0.092816, b: 0.499053},
      RGB{r: 0.378211, g: 0.095332, b: 0.500067},
      RGB{r: 0.384299, g: 0.097855, b: 0.501002},
      RGB{r: 0.390384, g: 0.100379, b: 0.501864},
      RGB{r: 0.396467, g: 0.102902, b: 0.502658},
      RGB{r: 0.402548, g: 0.105420, b: 0.503386},
      RGB{r: 0.408629, g: 0.107930, b: 0.504052},
      RGB{r: 0.414709, g: 0.110431, b: 0.504662},
      RGB{r: 0.420791, g: 0.112920, b: 0.505215},
      RGB{r: 0.426877, g: 0.115395, b: 0.505714},
      RGB{r: 0.432967, g: 0.117855, b: 0.506160},
      RGB{r: 0.439062, g: 0.120298, b: 0.506555},
      RGB{r: 0.445163, g: 0.122724, b: 0.506901},
      RGB{r: 0.451271, g: 0.125132, b: 0.507198},
      RGB{r: 0.457386, g: 0.127522, b: 0.507448},
      RGB{r: 0.463508, g: 0.129893, b: 0.507652},
      RGB{r: 0.469640, g: 0.132245, b: 0.507809},
      RGB{r: 0.475780, g: 0.134577, b: 0.507921},
      RGB{r: 0.481929, g: 0.136891, b: 0.507989},
      RGB{r: 0.488088, g: 0.139186, b: 0.508011},
      RGB{r: 0.494258, g: 0.141462, b: 0.507988},
      RGB{r: 0.500438, g: 0.143719, b: 0.507920},
      RGB{r: 0.506629, g: 0.145958, b: 0.507806},
      RGB{r: 0.512831, g: 0.148179, b: 0.507648},
      RGB{r: 0.519045, g: 0.150383, b: 0.507443},
      RGB{r: 0.525270, g: 0.152569, b: 0.507192},
      RGB{r: 0.531507, g: 0.154739, b: 0.506895},
      RGB{r: 0.537755, g: 0.156894, b: 0.506551},
      RGB{r: 0.544015, g: 0.159033, b: 0.506159},
      RGB{r: 0.550287, g: 0.161158, b: 0.505719},
      RGB{r: 0.556571, g: 0.163269, b: 0.505230},
      RGB{r: 0.562866, g: 0.165368, b: 0.504692},
      RGB{r: 0.569172, g: 0.167454, b: 0.504105},
      RGB{r: 0.575490, g: 0.169530, b: 0.503466},
      RGB{r: 0.581819, g: 0.171596, b: 0.502777},
      RGB{r: 0.588158, g: 0.173652, b: 0.502035},
      RGB{r: 0.594508, g: 0.175701, b: 0.501241},
      RGB{r: 0.600868, g: 0.177743, b: 0.500394},
      RGB{r: 0.607238, g: 0.179779, b: 0.499492},
      RGB{r: 0.613617, g: 0.181811, b: 0.498536},
      RGB{r: 0.620005, g: 0.183840, b: 0.497524},
      RGB{r: 0.626401, g: 0.185867, b: 0.496456},
      RGB{r: 0.632805, g: 0.187893, b: 0.495332},
      RGB{r: 0.639216, g: 0.189921, b: 0.494150},
      RGB{r: 0.645633, g: 0.191952, b: 0.492910},
      RGB{r: 0.652056, g: 0.193986, b: 0.491611},
      RGB{r: 0.658483, g: 0.196027, b: 0.490253},
      RGB{r: 0.664915, g: 0.198075, b: 0.488836},
      RGB{r: 0.671349, g: 0.200133, b: 0.487358},
      RGB{r: 0.677786, g: 0.202203, b: 0.485819},
      RGB{r: 0.684224, g: 0.204286, b: 0.484219},
      RGB{r: 0.690661, g: 0.206384, b: 0.482558},
      RGB{r: 0.697098, g: 0.208501, b: 0.480835},
      RGB{r: 0.703532, g: 0.210638, b: 0.479049},
      RGB{r: 0.709962, g: 0.212797, b: 0.477201},
      RGB{r: 0.716387, g: 0.214982, b: 0.475290},
      RGB{r: 0.722805, g: 0.217194, b: 0.473316},
      RGB{r: 0.729216, g: 0.219437, b: 0.471279},
      RGB{r: 0.735616, g: 0.221713, b: 0.469180},
      RGB{r: 0.742004, g: 0.224025, b: 0.467018},
      RGB{r: 0.748378, g: 0.226377, b: 0.464794},
      RGB{r: 0.754737, g: 0.228772, b: 0.462509},
      RGB{r: 0.761077, g: 0.231214, b: 0.460162},
      RGB{r: 0.767398, g: 0.233705, b: 0.457755},
      RGB{r: 0.773695, g: 0.236249, b: 0.455289},
      RGB{r: 0.779968, g: 0.238851, b: 0.452765},
      RGB{r: 0.786212, g: 0.241514, b: 0.450184},
      RGB{r: 0.792427, g: 0.244242, b: 0.447543},
      RGB{r: 0.798608, g: 0.247040, b: 0.444848},
      RGB{r: 0.804752, g: 0.249911, b: 0.442102},
      RGB{r: 0.810855, g: 0.252861, b: 0.439305},
      RGB{r: 0.816914, g: 0.255895, b: 0.436461},
      RGB{r: 0.822926, g: 0.259016, b: 0.433573},
      RGB{r: 0.828886, g: 0.262229, b: 0.430644},
      RGB{r: 0.834791, g: 0.265540, b: 0.427671},
      RGB{r: 0.840636, g: 0.268953, b: 0.424666},
      RGB{r: 0.846416, g: 0.272473, b: 0.421631},
      RGB{r: 0.852126, g: 0.276106, b: 0.418573},
      RGB{r: 0.857763, g: 0.279857, b: 0.415496},
      RGB{r: 0.863320, g: 0.283729, b: 0.412403},
      RGB{r: 0.868793, g: 0.287728, b: 0.409303},
      RGB{r: 0.874176, g: 0.291859, b: 0.406205},
      RGB{r: 0.879464, g: 0.296125, b: 0.403118},
      RGB{r: 0.884651, g: 0.300530, b: 0.400047},
      RGB{r: 0.889731, g: 0.305079, b: 0.397002},
      RGB{r: 0.894700, g: 0.309773, b: 0.393995},
      RGB{r: 0.899552, g: 0.314616, b: 0.391037},
      RGB{r: 0.904281, g: 0.319610, b: 0.388137},
      RGB{r: 0.908884, g: 0.324755, b: 0.385308},
      RGB{r: 0.913354, g: 0.330052, b: 0.382563},
      RGB{r: 0.917689, g: 0.335500, b: 0.379915},
      RGB{r: 0.921884, g: 0.341098, b: 0.377376},
      RGB{r: 0.925937, g: 0.346844, b: 0.374959},
      RGB{r: 0.929845, g: 0.352734, b: 0.372677},
      RGB{r: 0.933606, g: 0.358764, b: 0.370541},
      RGB{r: 0.937221, g: 0.364929, b: 0.368567},
      RGB{r: 0.940687, g: 0.371224, b: 0.366762},
      RGB{r: 0.944006, g: 0.377643, b: 0.365136},
      RGB{r: 0.947180, g: 0.384178, b: 0.363701},
      RGB{r: 0.950210, g: 0.390820, b: 0.362468},
      RGB{r: 0.953099, g: 0.397563, b: 0.361438},
      RGB{r: 0.955849, g: 0.404400, b: 0.360619},
      RGB{r: 0.958464, g: 0.411324, b: 0.360014},
      RGB{r: 0.960949, g: 0.418323, b: 0.359630},
      RGB{r: 0.963310, g: 0.425390, b: 0.359469},
      RGB{r: 0.965549, g: 0.432519, b: 0.359529},
      RGB{r: 0.967671, g: 0.439703, b: 0.359810},
      RGB{r: 0.969680, g: 0.446936, b: 0.360311},
      RGB{r: 0.971582, g: 0.454210, b: 0.361030},
      RGB{r: 0.973381, g: 0.461520, b: 0.361965},
      RGB{r: 0.975082, g: 0.468861, b: 0.363111},
      RGB{r: 0.976690, g: 0.476226, b: 0.364466},
      RGB{r: 0.978210, g: 0.483612, b: 0.366025},
      RGB{r: 0.979645, g: 0.491014, b: 0.367783},
      RGB{r: 0.981000, g: 0.498428, b: 0.369734},
      RGB{r: 0.982279, g: 0.505851, b: 0.371874},
      RGB{r: 0.983485, g: 0.513280, b: 0.374198},
      RGB{r: 0.984622, g: 0.520713, b: 0.376698},
      RGB{r: 0.985693, g: 0.528148, b: 0.379371},
      RGB{r: 0.986700, g: 0.535582, b: 0.382210},
      RGB{r: 0.987646, g: 0.543015, b: 0.385210},
      RGB{r: 0.988533, g: 0.550446, b: 0.388365},
      RGB{r: 0.989363, g: 0.557873, b: 0.391671},
      RGB{r: 0.990138, g: 0.565296, b: 0.395122},
      RGB{r: 0.990871, g: 0.572706, b: 0.398714},
      RGB{r: 0.991558, g: 0.580107, b: 0.402441},
      RGB{r: 0.992196, g: 0.587502, b: 0.406299},
      RGB{r: 0.992785, g: 0.594891, b: 0.410283},
      RGB{r: 0.993326, g: 0.602275, b: 0.414390},
      RGB{r: 0.993834, g: 0.609644, b: 0.418613},
      RGB{r: 0.994309, g: 0.616999, b: 0.422950},
      RGB{r: 0.994738, g: 0.624350, b: 0.427397},
      RGB{r: 0.995122, g: 0.631696, b: 0.431951},
      RGB{r: 0.995480, g: 0.639027, b: 0.436607},
      RGB{r: 0.995810, g: 0.646344, b: 0.441361},
      RGB{r: 0.996096, g: 0.653659, b: 0.446213},
      RGB{r: 0.996341, g: 0.660969, b: 0.451160},
      RGB{r: 0.996580, g: 0.668256, b: 0.456192},
      RGB{r: 0.996775, g: 0.675541, b: 0.461314},
      RGB{r: 0.996925, g: 0.682828, b: 0.466526},
      RGB{r: 0.997077, g: 0.690088, b: 0.471811},
      RGB{r: 0.997186, g: 0.697349, b: 0.477182},
      RGB{r: 0.997254, g: 0.704611, b: 0.482635},
      RGB{r: 0.997325, g: 0.711848, b: 0.488154},
      RGB{r: 0.997351, g: 0.719089, b: 0.493755},
      RGB{r: 0.997351, g: 0.726324, b: 0.499428},
      RGB{r: 0.997341, g: 0.733545, b: 0.505167},
      RGB{r: 0.997285, g: 0.740772, b: 0.510983},
      RGB{r: 0.997228, g: 0.747981, b: 0.516859},
      RGB{r: 0.997138, g: 0.755190, b: 0.522806},
      RGB{r: 0.997019, g: 0.762398, b: 0.528821},
      RGB{r: 0.996898, g: 0.769591, b: 0.534892},
      RGB{r: 0.996727, g: 0.776795, b: 0.541039},
      RGB{r: 0.996571, g: 0.783977, b: 0.547233},
      RGB{r: 0.996369, g: 0.791167, b: 0.553499},
      RGB{r: 0.996162, g: 0.798348, b: 0.559820},
      RGB{r: 0.995932, g: 0.805527, b: 0.566202},
      RGB{r: 0.995680, g: 0.812706, b: 0.572645},
      RGB{r: 0.995424, g: 0.819875, b: 0.579140},
      RGB{r: 0.995131, g: 0.827052, b: 0.585701},
      RGB{r: 0.994851, g: 0.834213, b: 0.592307},
      RGB{r: 0.994524, g: 0.841387, b: 0.598983},
      RGB{r: 0.994222, g: 0.848540, b: 0.605696},
      RGB{r: 0.993866, g: 0.855711, b: 0.612482},
      RGB{r: 0.993545, g: 0.862859, b: 0.619299},
      RGB{r: 0.993170, g: 0.870024, b: 0.626189},
      RGB{r: 0.992831, g: 0.877168, b: 0.633109},
      RGB{r: 0.992440, g: 0.884330, b: 0.640099},
      RGB{r: 0.992089, g: 0.891470, b: 0.647116},
      RGB{r: 0.991688, g: 0.898627, b: 0.654202},
      RGB{r: 0.991332, g: 0.905763, b: 0.661309},
      RGB{r: 0.990930, g: 0.912915, b: 0.668481},
      RGB{r: 0.990570, g: 0.920049, b: 0.675675},
      RGB{r: 0.990175, g: 0.927196, b: 0.682926},
      RGB{r: 0.989815, g: 0.934329, b: 0.690198},
      RGB{r: 0.989434, g: 0.941470, b: 0.697519},
      RGB{r: 0.989077, g: 0.948604, b: 0.704863},
      RGB{r: 0.988717, g: 0.955742, b: 0.712242},
      RGB{r: 0.988367, g: 0.962878, b: 0.719649},
      RGB{r: 0.988033, g: 0.970012, b: 0.727077},
      RGB{r: 0.987691, g: 0.977154, b: 0.734536},
      RGB{r: 0.987387, g: 0.984288, b: 0.742002},
      RGB{r: 0.987053, g: 0.991438, b: 0.749504},
    ]};
}

lazy_static! {
  pub(crate) static ref INFERNO: PaletteData = PaletteData {
    name: "inferno",
    rgb: vec![
      RGB{r: 0.001462, g: 0.000466, b: 0.013866},
      RGB{r: 0.002267, g: 0.001270, b: 0.018570},
      RGB{r: 0.003299, g: 0.002249, b: 0.024239},
      RGB{r: 0.004547, g: 0.003392, b: 0.030909},
      RGB{r: 0.006006, g: 0.004692, b: 0.038558},
      RGB{r: 0.007676, g: 0.006136, b: 0.046836},
      RGB{r: 0.009561, g: 0.007713, b: 0.055143},
      RGB{r: 0.011663, g: 0.009417, b: 0.063460},
      RGB{r: 0.013995, g: 0.011225, b: 0.071862},
      RGB{r: 0.016561, g: 0.013136, b: 0.080282},
      RGB{r: 0.019373, g: 0.015133, b: 0.088767},
      RGB{r: 0.022447, g: 0.017199, b: 0.097327},
      RGB{r: 0.025793, g: 0.019331, b: 0.105930},
      RGB{r: 0.029432, g: 0.021503, b: 0.114621},
      RGB{r: 0.033385, g: 0.023702, b: 0.123397},
      RGB{r: 0.037668, g: 0.025921, b: 0.132232},
      RGB{r: 0.042253, g: 0.028139, b: 0.141141},
      RGB{r: 0.046915, g: 0.030324, b: 0.150164},
      RGB{r: 0.051644, g: 0.032474, b: 0.159254},
      RGB{r: 0.056449, g: 0.034569, b: 0.168414},
      RGB{r: 0.061340, g: 0.036590, b: 0.177642},
      RGB{r: 0.066331, g: 0.038504, b: 0.186962},
      RGB{r: 0.071429, g: 0.040294, b: 0.196354},
      RGB{r: 0.076637, g: 0.041905, b: 0.205799},
      RGB{r: 0.081962, g: 0.043328, b: 0.215289},
      RGB{r: 0.087411, g: 0.044556, b: 0.224813},
      RGB{r: 0.092990, g: 0.045583, b: 0.234358},
      RGB{r: 0.098702, g: 0.046402, b: 0.243904},
      RGB{r: 0.104551, g: 0.047008, b: 0.253430},
      RGB{r: 0.110536, g: 0.047399, b: 0.262912},
      RGB{r: 0.116656, g: 0.047574, b: 0.272321},
      RGB{r: 0.122908, g: 0.047536, b: 0.281624},
      RGB{r: 0.129285, g: 0.047293, b: 0.290788},
      RGB{r: 0.135778, g: 0.046856, b: 0.299776},
      RGB{r: 0.142378, g: 0.046242, b: 0.308553},
      RGB{r: 0.149073, g: 0.045468, b: 0.317085},
      RGB{r: 0.155850, g: 0.044559, b: 0.325338},
      RGB{r: 0.162689, g: 0.043554, b: 0.333277},
      RGB{r: 0.169575, g: 0.042489, b: 0.340874},
      RGB{r: 0.176493, g: 0.041402, b: 0.348111},
      RGB{r: 0.183429, g: 0.040329, b: 0.354971},
      RGB{r: 0.190367, g: 0.039309, b: 0.361447},
      RGB{r: 0.197297, g: 0.038400, b: 0.367535},
      RGB{r: 0.204209, g: 0.037632, b: 0.373238},
      RGB{r: 0.211095, g: 0.037030, b: 0.378563},
      RGB{r: 0.217949, g: 0.036615, b: 0.383522},
      RGB{r: 0.224763, g: 0.036405, b: 0.388129},
      RGB{r: 0.231538, g: 0.036405, b: 0.392400},
      RGB{r: 0.238273, g: 0.036621, b: 0.396353},
      RGB{r: 0.244967, g: 0.037055, b: 0.400007},
      RGB{r: 0.251620, g: 0.037705, b: 0.403378},
      RGB{r: 0.258234, g: 0.038571, b: 0.406485},
      RGB{r: 0.264810, g: 0.039647, b: 0.409345},
      RGB{r: 0.271347, g: 0.040922, b: 0.411976},
      RGB{r: 0.277850, g: 0.042353, b: 0.414392},
      RGB{r: 0.284321, g: 0.043933, b: 0.416608},
      RGB{r: 0.290763, g: 0.045644, b: 0.418637},
      RGB{r: 0.297178, g: 0.047470, b: 0.420491},
      RGB{r: 0.303568, g: 0.049396, b: 0.422182},
      RGB{r: 0.309935, g: 0.051407, b: 0.423721},
      RGB{r: 0.316282, g: 0.053490, b: 0.425116},
      RGB{r: 0.322610, g: 0.055634, b: 0.426377},
      RGB{r: 0.328921, g: 0.057827, b: 0.427511},
      RGB{r: 0.335217, g: 0.060060, b: 0.428524},
      RGB{r: 0.341500, g: 0.062325, b: 0.429425},
      RGB{r: 0.347771, g: 0.064616, b: 0.430217},
      RGB{r: 0.354032, g: 0.066925, b: 0.430906},
      RGB{r: 0.360284, g: 0.069247, b: 0.431497},
      RGB{r: 0.366529, g: 0.071579, b: 0.431994},
      RGB{r: 0.372768, g: 0.073915, b: 0.432400},
      RGB{r: 0.379001, g: 0.076253, b: 0.432719},
      RGB{r: 0.385228, g: 0.078591, b: 0.432955},
      RGB{r: 0.391453, g: 0.080927, b: 0.433109},
      RGB{r: 0.397674, g: 0.083257, b: 0.433183},
      RGB{r: 0.403894, g: 0.085580, b: 0.433179},
      RGB{r: 0.410113, g: 0.087896, b: 0.433098},
      RGB{r: 0.416331, g: 0.090203, b: 0.432943},
      RGB{r: 0.422549, g: 0.092501, b: 0.432714},
      RGB{r: 0.428768, g: 0.094790, b: 0.432412},
      RGB{r: 0.434987, g: 0.097069, b: 0.432039},
      RGB{r: 0.441207, g: 0.099338, b: 0.431594},
      RGB{r: 0.447428, g: 0.101597, b: 0.431080},
      RGB{r: 0.453651, g: 0.103848, b: 0.430498},
      RGB{r: 0.459875, g: 0.106089, b: 0.429846},
      RGB{r: 0.466100, g: 0.108322, b: 0.429125},
      RGB{r: 0.472328, g: 0.110547, b: 0.428334},
      RGB{r: 0.478558, g: 0.112764, b: 0.427475},
      RGB{r: 0.484789, g: 0.114974, b: 0.426548},
      RGB{r: 0.491022, g: 0.117179, b: 0.425552},
      RGB{r: 0.497257, g: 0.119379, b: 0.424488},
      RGB{r: 0.503493, g: 0.121575, b: 0.423356},
      RGB{r: 0.509730, g: 0.123769, b: 0.422156},
      RGB{r: 0.515967, g: 0.125960, b: 0.420887},
      RGB{r: 0.522206, g: 0.128150, b: 0.419549},
      RGB{r: 0.528444, g: 0.130341, b: 0.418142},
      RGB{r: 0.534683, g: 0.132534, b: 0.416667},
      RGB{r: 0.540920, g: 0.134729, b: 0.415123},
      RGB{r: 0.547157, g: 0.136929, b: 0.413511},
      RGB{r: 0.553392, g: 0.139134, b: 0.411829},
      RGB{r: 0.559624, g: 0.141346, b: 0.410078},
      RGB{r: 0.565854, g: 0.143567, b: 0.408258},
      RGB{r: 0.572081, g: 0.145797, b: 0.406369},
      RGB{r: 0.578304, g: 0.148039, b: 0.404411},
      RGB{r: 0.584521, g: 0.150294, b: 0.402385},
      RGB{r: 0.590734, g: 0.152563, b: 0.400290},
      RGB{r: 0.596940, g: 0.154848, b: 0.398125},
      RGB{r: 0.603139, g: 0.157151, b: 0.395891},
      RGB{r: 0.609330, g: 0.159474, b: 0.393589},
      RGB{r: 0.615513, g: 0.161817, b: 0.391219},
      RGB{r: 0.621685, g: 0.164184, b: 0.388781},
      RGB{r: 0.627847, g: 0.166575, b: 0.386276},
      RGB{r: 0.633998, g: 0.168992, b: 0.383704},
      RGB{r: 0.640135, g: 0.171438, b: 0.381065},
      RGB{r: 0.646260, g: 0.173914, b: 0.378359},
      RGB{r: 0.652369, g: 0.176421, b: 0.375586},
      RGB{r: 0.658463, g: 0.178962, b: 0.372748},
      RGB{r: 0.664540, g: 0.181539, b: 0.369846},
      RGB{r: 0.670599, g: 0.184153, b: 0.366879},
      RGB{r: 0.676638, g: 0.186807, b: 0.363849},
      RGB{r: 0.682656, g: 0.189501, b: 0.360757},
      RGB{r: 0.688653, g: 0.192239, b: 0.357603},
      RGB{r: 0.694627, g: 0.195021, b: 0.354388},
      RGB{r: 0.700576, g: 0.197851, b: 0.351113},
      RGB{r: 0.706500, g: 0.200728, b: 0.347777},
      RGB{r: 0.712396, g: 0.203656, b: 0.344383},
      RGB{r: 0.718264, g: 0.206636, b: 0.340931},
      RGB{r: 0.724103, g: 0.209670, b: 0.337424},
      RGB{r: 0.729909, g: 0.212759, b: 0.333861},
      RGB{r: 0.735683, g: 0.215906, b: 0.330245},
      RGB{r: 0.741423, g: 0.219112, b: 0.326576},
      RGB{r: 0.747127, g: 0.222378, b: 0.322856},
      RGB{r: 0.752794, g: 0.225706, b: 0.319085},
      RGB{r: 0.758422, g: 0.229097, b: 0.315266},
      RGB{r: 0.764010, g: 0.232554, b: 0.311399},
      RGB{r: 0.769556, g: 0.236077, b: 0.307485},
      RGB{r: 0.775059, g: 0.239667, b: 0.303526},
      RGB{r: 0.780517, g: 0.243327, b: 0.299523},
      RGB{r: 0.785929, g: 0.247056, b: 0.295477},
      RGB{r: 0.791293, g: 0.250856, b: 0.291390},
      RGB{r: 0.796607, g: 0.254728, b: 0.287264},
      RGB{r: 0.801871, g: 0.258674, b: 0.283099},
      RGB{r: 0.807082, g: 0.262692, b: 0.278898},
      RGB{r: 0.812239, g: 0.266786, b: 0.274661},
      RGB{r: 0.817341, g: 0.270954, b: 0.270390},
      RGB{r: 0.822386, g: 0.275197, b: 0.266085},
      RGB{r: 0.827372, g: 0.279517, b: 0.261750},
      RGB{r: 0.832299, g: 0.283913, b: 0.257383},
      RGB{r: 0.837165, g: 0.288385, b: 0.252988},
      RGB{r: 0.841969, g: 0.292933, b: 0.248564},
      RGB{r: 0.846709, g: 0.297559, b: 0.244113},
      RGB{r: 0.851384, g: 0.302260, b: 0.239636},
      RGB{r: 0.855992, g: 0.307038, b: 0.235133},
      RGB{r: 0.860533, g: 0.311892, b: 0.230606},
      RGB{r: 0.865006, g: 0.316822, b: 0.226055},
      RGB{r: 0.869409, g: 0.321827, b: 0.221482},
      RGB{r: 0.873741, g: 0.326906, b: 0.216886},
      RGB{r: 0.878001, g: 0.332060, b: 0.212268},
      RGB{r: 0.882188, g: 0.337287, b: 0.207628},
      RGB{r: 0.886302, g: 0.342586, b: 0.202968},
      RGB{r: 0.890341, g: 0.347957, b: 0.198286},
      RGB{r: 0.894305, g: 0.353399, b: 0.193584},
      RGB{r: 0.898192, g: 0.358911, b: 0.188860},
      RGB{r: 0.902003, g: 0.364492, b: 0.184116},
      RGB{r: 0.905735, g: 0.370140, b: 0.179350},
      RGB{r: 0.909390, g: 0.375856, b: 0.174563},
      RGB{r: 0.912966, g: 0.381636, b: 0.169755},
      RGB{r: 0.916462, g: 0.387481, b: 0.164924},
      RGB{r: 0.919879, g: 0.393389, b: 0.160070},
      RGB{r: 0.923215, g: 0.399359, b: 0.155193},
      RGB{r: 0.926470, g: 0.405389, b: 0.150292},
      RGB{r: 0.929644, g: 0.411479, b: 0.145367},
      RGB{r: 0.932737, g: 0.417627, b: 0.140417},
      RGB{r: 0.935747, g: 0.423831, b: 0.135440},
      RGB{r: 0.938675, g: 0.430091, b: 0.130438},
      RGB{r: 0.941521, g: 0.436405, b: 0.125409},
      RGB{r: 0.944285, g: 0.442772, b: 0.120354},
      RGB{r: 0.946965, g: 0.449191, b: 0.115272},
      RGB{r: 0.949562, g: 0.455660, b: 0.110164},
      RGB{r: 0.952075, g: 0.462178, b: 0.105031},
      RGB{r: 0.954506, g: 0.468744, b: 0.099874},
      RGB{r: 0.956852, g: 0.475356, b: 0.094695},
      RGB{r: 0.959114, g: 0.482014, b: 0.089499},
      RGB{r: 0.961293, g: 0.488716, b: 0.084289},
      RGB{r: 0.963387, g: 0.495462, b: 0.079073},
      RGB{r: 0.965397, g: 0.502249, b: 0.073859},
      RGB{r: 0.967322, g: 0.509078, b: 0.068659},
      RGB{r: 0.969163, g: 0.515946, b: 0.063488},
      RGB{r: 0.970919, g: 0.522853, b: 0.058367},
      RGB{r: 0.972590, g: 0.529798, b: 0.053324},
      RGB{r: 0.974176, g: 0.536780, b: 0.048392},
      RGB{r: 0.975677, g: 0.543798, b: 0.043618},
      RGB{r: 0.977092, g: 0.550850, b: 0.039050},
      RGB{r: 0.978422, g: 0.557937, b: 0.034931},
      RGB{r: 0.979666, g: 0.565057, b: 0.031409},
      RGB{r: 0.980824, g: 0.572209, b: 0.028508},
      RGB{r: 0.981895, g: 0.579392, b: 0.026250},
      RGB{r: 0.982881, g: 0.586606, b: 0.024661},
      RGB{r: 0.983779, g: 0.593849, b: 0.023770},
      RGB{r: 0.984591, g: 0.601122, b: 0.023606},
      RGB{r: 0.985315, g: 0.608422, b: 0.024202},
      RGB{r: 0.985952, g: 0.615750, b: 0.025592},
      RGB{r: 0.986502, g: 0.623105, b: 0.027814},
      RGB{r: 0.986964, g: 0.630485, b: 0.030908},
      RGB{r: 0.987337, g: 0.637890, b: 0.034916},
      RGB{r: 0.987622, g: 0.645320, b: 0.039886},
      RGB{r: 0.987819, g: 0.652773, b: 0.045581},
      RGB{r: 0.987926, g: 0.660250, b: 0.051750},
      RGB{r: 0.987945, g: 0.667748, b: 0.058329},
      RGB{r: 0.987874, g: 0.675267, b: 0.065257},
      RGB{r: 0.987714, g: 0.682807, b: 0.072489},
      RGB{r: 0.987464, g: 0.690366, b: 0.079990},
      RGB{r: 0.987124, g: 0.697944, b: 0.087731},
      RGB{r: 0.986694, g: 0.705540, b: 0.095694},
      RGB{r: 0.986175, g: 0.713153, b: 0.103863},
      RGB{r: 0.985566, g: 0.720782, b: 0.112229},
      RGB{r: 0.984865, g: 0.728427, b: 0.120785},
      RGB{r: 0.984075, g: 0.736087, b: 0.129527},
      RGB{r: 0.983196, g: 0.743758, b: 0.138453},
      RGB{r: 0.982228, g: 0.751442, b: 0.147565},
      RGB{r: 0.981173, g: 0.759135, b: 0.156863},
      RGB{r: 0.980032, g: 0.766837, b: 0.166353},
      RGB{r: 0.978806, g: 0.774545, b: 0.176037},
      RGB{r: 0.977497, g: 0.782258, b: 0.185923},
      RGB{r: 0.976108, g: 0.789974, b: 0.196018},
      RGB{r: 0.974638, g: 0.797692, b: 0.206332},
      RGB{r: 0.973088, g: 0.805409, b: 0.216877},
      RGB{r: 0.971468, g: 0.813122, b: 0.227658},
      RGB{r: 0.969783, g: 0.820825, b: 0.238686},
      RGB{r: 0.968041, g: 0.828515, b: 0.249972},
      RGB{r: 0.966243, g: 0.836191, b: 0.261534},
      RGB{r: 0.964394, g: 0.843848, b: 0.273391},
      RGB{r: 0.962517, g: 0.851476, b: 0.285546},
      RGB{r: 0.960626, g: 0.859069, b: 0.298010},
      RGB{r: 0.958720, g: 0.866624, b: 0.310820},
      RGB{r: 0.956834, g: 0.874129, b: 0.323974},
      RGB{r: 0.954997, g: 0.881569, b: 0.337475},
      RGB{r: 0.953215, g: 0.888942, b: 0.351369},
      RGB{r: 0.951546, g: 0.896226, b: 0.365627},
      RGB{r: 0.950018, g: 0.903409, b: 0.380271},
      RGB{r: 0.948683, g: 0.910473, b: 0.395289},
      RGB{r: 0.947594, g: 0.917399, b: 0.410665},
      RGB{r: 0.946809, g: 0.924168, b: 0.426373},
      RGB{r: 0.946392, g: 0.930761, b: 0.442367},
      RGB{r: 0.946403, g: 0.937159, b: 0.458592},
      RGB{r: 0.946903, g: 0.943348, b: 0.474970},
      RGB{r: 0.947937, g: 0.949318, b: 0.491426},
      RGB{r: 0.949545, g: 0.955063, b: 0.507860},
      RGB{r: 0.951740, g: 0.960587, b: 0.524203},
      RGB{r: 0.954529, g: 0.965896, b: 0.540361},
      RGB{r: 0.957896, g: 0.971003, b: 0.556275},
      RGB{r: 0.961812, g: 0.975924, b: 0.571925},
      RGB{r: 0.966249, g: 0.980678, b: 0.587206},
      RGB{r: 0.971162, g: 0.985282, b: 0.602154},
      RGB{r: 0.976511, g: 0.989753, b: 0.616760},
      RGB{r: 0.982257, g: 0.994109, b: 0.631017},
      RGB{r: 0.988362, g: 0.998364, b: 0.644924},
    ]};
}

lazy_static! {
  pub(crate) static ref PLASMA: PaletteData = PaletteData {
    name: "plasma",
    rgb: vec![
      RGB{r: 0.050383, g: 0.029803, b: 0.527975},
      RGB{r: 0.063536, g: 0.028426, b: 0.533124},
      RGB{r: 0.075353, g: 0.027206, b: 0.538007},
      RGB{r: 0.086222, g: 0.026125, b: 0.542658},
      RGB{r: 0.096379, g: 0.025165, b: 0.547103},
      RGB{r: 0.105980, g: 0.024309, b: 0.551368},
      RGB{r: 0.115124, g: 0.023556, b: 0.555468},
      RGB{r: 0.123903, g: 0.022878, b: 0.559423},
      RGB{r: 0.132381, g: 0.022258, b: 0.563250},
      RGB{r: 0.140603, g: 0.021687, b: 0.566959},
      RGB{r: 0.148607, g: 0.021154, b: 0.570562},
      RGB{r: 0.156421, g: 0.020651, b: 0.574065},
      RGB{r: 0.164070, g: 0.020171, b: 0.577478},
      RGB{r: 0.171574, g: 0.019706, b: 0.580806},
      RGB{r: 0.178950, g: 0.019252, b: 0.584054},
      RGB{r: 0.186213, g: 0.018803, b: 0.587228},
      RGB{r: 0.193374, g: 0.018354, b: 0.590330},
      RGB{r: 0.200445, g: 0.017902, b: 0.593364},
      RGB{r: 0.207435, g: 0.017442, b: 0.596333},
      RGB{r: 0.214350, g: 0.016973, b: 0.599239},
      RGB{r: 0.221197, g: 0.016497, b: 0.602083},
      RGB{r: 0.227983, g: 0.016007, b: 0.604867},
      RGB{r: 0.234715, g: 0.015502, b: 0.607592},
      RGB{r: 0.241396, g: 0.014979, b: 0.610259},
      RGB{r: 0.248032, g: 0.014439, b: 0.612868},
      RGB{r: 0.254627, g: 0.013882, b: 0.615419},
      RGB{r: 0.261183, g: 0.013308, b: 0.617911},
      RGB{r: 0.267703, g: 0.012716, b: 0.620346},
      RGB{r: 0.274191, g: 0.012109, b: 0.622722},
      RGB{r: 0.280648, g: 0.011488, b: 0.625038},
      RGB{r: 0.287076, g: 0.010855, b: 0.627295},
      RGB{r: 0.293478, g: 0.010213, b: 0.629490},
      RGB{r: 0.299855, g: 0.009561, b: 0.631624},
      RGB{r: 0.306210, g: 0.008902, b: 0.633694},
      RGB{r: 0.312543, g: 0.008239, b: 0.635700},
      RGB{r: 0.318856, g: 0.007576, b: 0.637640},
      RGB{r: 0.325150, g: 0.006915, b: 0.639512},
      RGB{r: 0.331426, g: 0.006261, b: 0.641316},
      RGB{r: 0.337683, g: 0.005618, b: 0.643049},
      RGB{r: 0.343925, g: 0.004991, b: 0.644710},
      RGB{r: 0.350150, g: 0.004382, b: 0.646298},
      RGB{r: 0.356359, g: 0.003798, b: 0.647810},
      RGB{r: 0.362553, g: 0.003243, b: 0.649245},
      RGB{r: 0.368733, g: 0.002724, b: 0.650601},
      RGB{r: 0.374897, g: 0.002245, b: 0.651876},
      RGB{r: 0.381047, g: 0.001814, b: 0.653068},
      RGB{r: 0.387183, g: 0.001434, b: 0.654177},
      RGB{r: 0.393304, g: 0.001114, b: 0.655199},
      RGB{r: 0.399411, g: 0.000859, b: 0.656133},
      RGB{r: 0.405503, g: 0.000678, b: 0.656977},
      RGB{r: 0.411580, g: 0.000577, b: 0.657730},
      RGB{r: 0.417642, g: 0.000564, b: 0.658390},
      RGB{r: 0.423689, g: 0.000646, b: 0.658956},
      RGB{r: 0.429719, g: 0.000831, b: 0.659425},
      RGB{r: 0.435734, g: 0.001127, b: 0.659797},
      RGB{r: 0.441732, g: 0.001540, b: 0.660069},
      RGB{r: 0.447714, g: 0.002080, b: 0.660240},
      RGB{r: 0.453677, g: 0.002755, b: 0.660310},
      RGB{r: 0.459623, g: 0.003574, b: 0.660277},
      RGB{r: 0.465550, g: 0.004545, b: 0.660139},
      RGB{r: 0.471457, g: 0.005678, b: 0.659897},
      RGB{r: 0.477344, g: 0.006980, b: 0.659549},
      RGB{r: 0.483210, g: 0.008460, b: 0.659095},
      RGB{r: 0.489055, g: 0.010127, b: 0.658534},
      RGB{r: 0.494877, g: 0.011990, b: 0.657865},
      RGB{r: 0.500678, g: 0.014055, b: 0.657088},
      RGB{r: 0.506454, g: 0.016333, b: 0.656202},
      RGB{r: 0.512206, g: 0.018833, b: 0.655209},
      RGB{r: 0.517933, g: 0.021563, b: 0.654109},
      RGB{r: 0.523633, g: 0.024532, b: 0.652901},
      RGB{r: 0.529306, g: 0.027747, b: 0.651586},
      RGB{r: 0.534952, g: 0.031217, b: 0.650165},
      RGB{r: 0.540570, g: 0.034950, b: 0.648640},
      RGB{r: 0.546157, g: 0.038954, b: 0.647010},
      RGB{r: 0.551715, g: 0.043136, b: 0.645277},
      RGB{r: 0.557243, g: 0.047331, b: 0.643443},
      RGB{r: 0.562738, g: 0.051545, b: 0.641509},
      RGB{r: 0.568201, g: 0.055778, b: 0.639477},
      RGB{r: 0.573632, g: 0.060028, b: 0.637349},
      RGB{r: 0.579029, g: 0.064296, b: 0.635126},
      RGB{r: 0.584391, g: 0.068579, b: 0.632812},
      RGB{r: 0.589719, g: 0.072878, b: 0.630408},
      RGB{r: 0.595011, g: 0.077190, b: 0.627917},
      RGB{r: 0.600266, g: 0.081516, b: 0.625342},
      RGB{r: 0.605485, g: 0.085854, b: 0.622686},
      RGB{r: 0.610667, g: 0.090204, b: 0.619951},
      RGB{r: 0.615812, g: 0.094564, b: 0.617140},
      RGB{r: 0.620919, g: 0.098934, b: 0.614257},
      RGB{r: 0.625987, g: 0.103312, b: 0.611305},
      RGB{r: 0.631017, g: 0.107699, b: 0.608287},
      RGB{r: 0.636008, g: 0.112092, b: 0.605205},
      RGB{r: 0.640959, g: 0.116492, b: 0.602065},
      RGB{r: 0.645872, g: 0.120898, b: 0.598867},
      RGB{r: 0.650746, g: 0.125309, b: 0.595617},
      RGB{r: 0.655580, g: 0.129725, b: 0.592317},
      RGB{r: 0.660374, g: 0.134144, b: 0.588971},
      RGB{r: 0.665129, g: 0.138566, b: 0.585582},
      RGB{r: 0.669845, g: 0.142992, b: 0.582154},
      RGB{r: 0.674522, g: 0.147419, b: 0.578688},
      RGB{r: 0.679160, g: 0.151848, b: 0.575189},
      RGB{r: 0.683758, g: 0.156278, b: 0.571660},
      RGB{r: 0.688318, g: 0.160709, b: 0.568103},
      RGB{r: 0.692840, g: 0.165141, b: 0.564522},
      RGB{r: 0.697324, g: 0.169573, b: 0.560919},
      RGB{r: 0.701769, g: 0.174005, b: 0.557296},
      RGB{r: 0.706178, g: 0.178437, b: 0.553657},
      RGB{r: 0.710549, g: 0.182868, b: 0.550004},
      RGB{r: 0.714883, g: 0.187299, b: 0.546338},
      RGB{r: 0.719181, g: 0.191729, b: 0.542663},
      RGB{r: 0.723444, g: 0.196158, b: 0.538981},
      RGB{r: 0.727670, g: 0.200586, b: 0.535293},
      RGB{r: 0.731862, g: 0.205013, b: 0.531601},
      RGB{r: 0.736019, g: 0.209439, b: 0.527908},
      RGB{r: 0.740143, g: 0.213864, b: 0.524216},
      RGB{r: 0.744232, g: 0.218288, b: 0.520524},
      RGB{r: 0.748289, g: 0.222711, b: 0.516834},
      RGB{r: 0.752312, g: 0.227133, b: 0.513149},
      RGB{r: 0.756304, g: 0.231555, b: 0.509468},
      RGB{r: 0.760264, g: 0.235976, b: 0.505794},
      RGB{r: 0.764193, g: 0.240396, b: 0.502126},
      RGB{r: 0.768090, g: 0.244817, b: 0.498465},
      RGB{r: 0.771958, g: 0.249237, b: 0.494813},
      RGB{r: 0.775796, g: 0.253658, b: 0.491171},
      RGB{r: 0.779604, g: 0.258078, b: 0.487539},
      RGB{r: 0.783383, g: 0.262500, b: 0.483918},
      RGB{r: 0.787133, g: 0.266922, b: 0.480307},
      RGB{r: 0.790855, g: 0.271345, b: 0.476706},
      RGB{r: 0.794549, g: 0.275770, b: 0.473117},
      RGB{r: 0.798216, g: 0.280197, b: 0.469538},
      RGB{r: 0.801855, g: 0.284626, b: 0.465971},
      RGB{r: 0.805467, g: 0.289057, b: 0.462415},
      RGB{r: 0.809052, g: 0.293491, b: 0.458870},
      RGB{r: 0.812612, g: 0.297928, b: 0.455338},
      RGB{r: 0.816144, g: 0.302368, b: 0.451816},
      RGB{r: 0.819651, g: 0.306812, b: 0.448306},
      RGB{r: 0.823132, g: 0.311261, b: 0.444806},
      RGB{r: 0.826588, g: 0.315714, b: 0.441316},
      RGB{r: 0.830018, g: 0.320172, b: 0.437836},
      RGB{r: 0.833422, g: 0.324635, b: 0.434366},
      RGB{r: 0.836801, g: 0.329105, b: 0.430905},
      RGB{r: 0.840155, g: 0.333580, b: 0.427455},
      RGB{r: 0.843484, g: 0.338062, b: 0.424013},
      RGB{r: 0.846788, g: 0.342551, b: 0.420579},
      RGB{r: 0.850066, g: 0.347048, b: 0.417153},
      RGB{r: 0.853319, g: 0.351553, b: 0.413734},
      RGB{r: 0.856547, g: 0.356066, b: 0.410322},
      RGB{r: 0.859750, g: 0.360588, b: 0.406917},
      RGB{r: 0.862927, g: 0.365119, b: 0.403519},
      RGB{r: 0.866078, g: 0.369660, b: 0.400126},
      RGB{r: 0.869203, g: 0.374212, b: 0.396738},
      RGB{r: 0.872303, g: 0.378774, b: 0.393355},
      RGB{r: 0.875376, g: 0.383347, b: 0.389976},
      RGB{r: 0.878423, g: 0.387932, b: 0.386600},
      RGB{r: 0.881443, g: 0.392529, b: 0.383229},
      RGB{r: 0.884436, g: 0.397139, b: 0.379860},
      RGB{r: 0.887402, g: 0.401762, b: 0.376494},
      RGB{r: 0.890340, g: 0.406398, b: 0.373130},
      RGB{r: 0.893250, g: 0.411048, b: 0.369768},
      RGB{r: 0.896131, g: 0.415712, b: 0.366407},
      RGB{r: 0.898984, g: 0.420392, b: 0.363047},
      RGB{r: 0.901807, g: 0.425087, b: 0.359688},
      RGB{r: 0.904601, g: 0.429797, b: 0.356329},
      RGB{r: 0.907365, g: 0.434524, b: 0.352970},
      RGB{r: 0.910098, g: 0.439268, b: 0.349610},
      RGB{r: 0.912800, g: 0.444029, b: 0.346251},
      RGB{r: 0.915471, g: 0.448807, b: 0.342890},
      RGB{r: 0.918109, g: 0.453603, b: 0.339529},
      RGB{r: 0.920714, g: 0.458417, b: 0.336166},
      RGB{r: 0.923287, g: 0.463251, b: 0.332801},
      RGB{r: 0.925825, g: 0.468103, b: 0.329435},
      RGB{r: 0.928329, g: 0.472975, b: 0.326067},
      RGB{r: 0.930798, g: 0.477867, b: 0.322697},
      RGB{r: 0.933232, g: 0.482780, b: 0.319325},
      RGB{r: 0.935630, g: 0.487712, b: 0.315952},
      RGB{r: 0.937990, g: 0.492667, b: 0.312575},
      RGB{r: 0.940313, g: 0.497642, b: 0.309197},
      RGB{r: 0.942598, g: 0.502639, b: 0.305816},
      RGB{r: 0.944844, g: 0.507658, b: 0.302433},
      RGB{r: 0.947051, g: 0.512699, b: 0.299049},
      RGB{r: 0.949217, g: 0.517763, b: 0.295662},
      RGB{r: 0.951344, g: 0.522850, b: 0.292275},
      RGB{r: 0.953428, g: 0.527960, b: 0.288883},
      RGB{r: 0.955470, g: 0.533093, b: 0.285490},
      RGB{r: 0.957469, g: 0.538250, b: 0.282096},
      RGB{r: 0.959424, g: 0.543431, b: 0.278701},
      RGB{r: 0.961336, g: 0.548636, b: 0.275305},
      RGB{r: 0.963203, g: 0.553865, b: 0.271909},
      RGB{r: 0.965024, g: 0.559118, b: 0.268513},
      RGB{r: 0.966798, g: 0.564396, b: 0.265118},
      RGB{r: 0.968526, g: 0.569700, b: 0.261721},
      RGB{r: 0.970205, g: 0.575028, b: 0.258325},
      RGB{r: 0.971835, g: 0.580382, b: 0.254931},
      RGB{r: 0.973416, g: 0.585761, b: 0.251540},
      RGB{r: 0.974947, g: 0.591165, b: 0.248151},
      RGB{r: 0.976428, g: 0.596595, b: 0.244767},
      RGB{r: 0.977856, g: 0.602051, b: 0.241387},
      RGB{r: 0.979233, g: 0.607532, b: 0.238013},
      RGB{r: 0.980556, g: 0.613039, b: 0.234646},
      RGB{r: 0.981826, g: 0.618572, b: 0.231287},
      RGB{r: 0.983041, g: 0.624131, b: 0.227937},
      RGB{r: 0.984199, g: 0.629718, b: 0.224595},
      RGB{r: 0.985301, g: 0.635330, b: 0.221265},
      RGB{r: 0.986345, g: 0.640969, b: 0.217948},
      RGB{r: 0.987332, g: 0.646633, b: 0.214648},
      RGB{r: 0.988260, g: 0.652325, b: 0.211364},
      RGB{r: 0.989128, g: 0.658043, b: 0.208100},
      RGB{r: 0.989935, g: 0.663787, b: 0.204859},
      RGB{r: 0.990681, g: 0.669558, b: 0.201642},
      RGB{r: 0.991365, g: 0.675355, b: 0.198453},
      RGB{r: 0.991985, g: 0.681179, b: 0.195295},
      RGB{r: 0.992541, g: 0.687030, b: 0.192170},
      RGB{r: 0.993032, g: 0.692907, b: 0.189084},
      RGB{r: 0.993456, g: 0.698810, b: 0.186041},
      RGB{r: 0.993814, g: 0.704741, b: 0.183043},
      RGB{r: 0.994103, g: 0.710698, b: 0.180097},
      RGB{r: 0.994324, g: 0.716681, b: 0.177208},
      RGB{r: 0.994474, g: 0.722691, b: 0.174381},
      RGB{r: 0.994553, g: 0.728728, b: 0.171622},
      RGB{r: 0.994561, g: 0.734791, b: 0.168938},
      RGB{r: 0.994495, g: 0.740880, b: 0.166335},
      RGB{r: 0.994355, g: 0.746995, b: 0.163821},
      RGB{r: 0.994141, g: 0.753137, b: 0.161404},
      RGB{r: 0.993851, g: 0.759304, b: 0.159092},
      RGB{r: 0.993482, g: 0.765499, b: 0.156891},
      RGB{r: 0.993033, g: 0.771720, b: 0.154808},
      RGB{r: 0.992505, g: 0.777967, b: 0.152855},
      RGB{r: 0.991897, g: 0.784239, b: 0.151042},
      RGB{r: 0.991209, g: 0.790537, b: 0.149377},
      RGB{r: 0.990439, g: 0.796859, b: 0.147870},
      RGB{r: 0.989587, g: 0.803205, b: 0.146529},
      RGB{r: 0.988648, g: 0.809579, b: 0.145357},
      RGB{r: 0.987621, g: 0.815978, b: 0.144363},
      RGB{r: 0.986509, g: 0.822401, b: 0.143557},
      RGB{r: 0.985314, g: 0.828846, b: 0.142945},
      RGB{r: 0.984031, g: 0.835315, b: 0.142528},
      RGB{r: 0.982653, g: 0.841812, b: 0.142303},
      RGB{r: 0.981190, g: 0.848329, b: 0.142279},
      RGB{r: 0.979644, g: 0.854866, b: 0.142453},
      RGB{r: 0.977995, g: 0.861432, b: 0.142808},
      RGB{r: 0.976265, g: 0.868016, b: 0.143351},
      RGB{r: 0.974443, g: 0.874622, b: 0.144061},
      RGB{r: 0.972530, g: 0.881250, b: 0.144923},
      RGB{r: 0.970533, g: 0.887896, b: 0.145919},
      RGB{r: 0.968443, g: 0.894564, b: 0.147014},
      RGB{r: 0.966271, g: 0.901249, b: 0.148180},
      RGB{r: 0.964021, g: 0.907950, b: 0.149370},
      RGB{r: 0.961681, g: 0.914672, b: 0.150520},
      RGB{r: 0.959276, g: 0.921407, b: 0.151566},
      RGB{r: 0.956808, g: 0.928152, b: 0.152409},
      RGB{r: 0.954287, g: 0.934908, b: 0.152921},
      RGB{r: 0.951726, g: 0.941671, b: 0.152925},
      RGB{r: 0.949151, g: 0.948435, b: 0.152178},
      RGB{r: 0.946602, g: 0.955190, b: 0.150328},
      RGB{r: 0.944152, g: 0.961916, b: 0.146861},
      RGB{r: 0.941896, g: 0.968590, b: 0.140956},
      RGB{r: 0.940015, g: 0.975158, b: 0.131326},
    ]};
}

lazy_static! {
  pub(crate) static ref VIRIDIS: PaletteData = PaletteData {
    name: "viridis",
    rgb: vec![
      RGB{r: 0.267004, g: 0.004874, b: 0.329415},
      RGB{r: 0.268510, g: 0.009605, b: 0.335427},
      RGB{r: 0.269944, g: 0.014625, b: 0.341379},
      RGB{r: 0.271305, g: 0.019942, b: 0.347269},
      RGB{r: 0.272594, g: 0.025563, b: 0.353093},
      RGB{r: 0.273809, g: 0.031497, b: 0.358853},
      RGB{r: 0.274952, g: 0.037752, b: 0.364543},
      RGB{r: 0.276022, g: 0.044167, b: 0.370164},
      RGB{r: 0.277018, g: 0.050344, b: 0.375715},
      RGB{r: 0.277941, g: 0.056324, b: 0.381191},
      RGB{r: 0.278791, g: 0.062145, b: 0.386592},
      RGB{r: 0.279566, g: 0.067836, b: 0.391917},
      RGB{r: 0.280267, g: 0.073417, b: 0.397163},
      RGB{r: 0.280894, g: 0.078907, b: 0.402329},
      RGB{r: 0.281446, g: 0.084320, b: 0.407414},
      RGB{r: 0.281924, g: 0.089666, b: 0.412415},
      RGB{r: 0.282327, g: 0.094955, b: 0.417331},
      RGB{r: 0.282656, g: 0.100196, b: 0.422160},
      RGB{r: 0.282910, g: 0.105393, b: 0.426902},
      RGB{r: 0.283091, g: 0.110553, b: 0.431554},
      RGB{r: 0.283197, g: 0.115680, b: 0.436115},
      RGB{r: 0.283229, g: 0.120777, b: 0.440584},
      RGB{r: 0.283187, g: 0.125848, b: 0.444960},
      RGB{r: 0.283072, g: 0.130895, b: 0.449241},
      RGB{r: 0.282884, g: 0.135920, b: 0.453427},
      RGB{r: 0.282623, g: 0.140926, b: 0.457517},
      RGB{r: 0.282290, g: 0.145912, b: 0.461510},
      RGB{r: 0.281887, g: 0.150881, b: 0.465405},
      RGB{r: 0.281412, g: 0.155834, b: 0.469201},
      RGB{r: 0.280868, g: 0.160771, b: 0.472899},
      RGB{r: 0.280255, g: 0.165693, b: 0.476498},
      RGB{r: 0.279574, g: 0.170599, b: 0.479997},
      RGB{r: 0.278826, g: 0.175490, b: 0.483397},
      RGB{r: 0.278012, g: 0.180367, b: 0.486697},
      RGB{r: 0.277134, g: 0.185228, b: 0.489898},
      RGB{r: 0.276194, g: 0.190074, b: 0.493001},
      RGB{r: 0.275191, g: 0.194905, b: 0.496005},
      RGB{r: 0.274128, g: 0.199721, b: 0.498911},
      RGB{r: 0.273006, g: 0.204520, b: 0.501721},
      RGB{r: 0.271828, g: 0.209303, b: 0.504434},
      RGB{r: 0.270595, g: 0.214069, b: 0.507052},
      RGB{r: 0.269308, g: 0.218818, b: 0.509577},
      RGB{r: 0.267968, g: 0.223549, b: 0.512008},
      RGB{r: 0.266580, g: 0.228262, b: 0.514349},
      RGB{r: 0.265145, g: 0.232956, b: 0.516599},
      RGB{r: 0.263663, g: 0.237631, b: 0.518762},
      RGB{r: 0.262138, g: 0.242286, b: 0.520837},
      RGB{r: 0.260571, g: 0.246922, b: 0.522828},
      RGB{r: 0.258965, g: 0.251537, b: 0.524736},
      RGB{r: 0.257322, g: 0.256130, b: 0.526563},
      RGB{r: 0.255645, g: 0.260703, b: 0.528312},
      RGB{r: 0.253935, g: 0.265254, b: 0.529983},
      RGB{r: 0.252194, g: 0.269783, b: 0.531579},
      RGB{r: 0.250425, g: 0.274290, b: 0.533103},
      RGB{r: 0.248629, g: 0.278775, b: 0.534556},
      RGB{r: 0.246811, g: 0.283237, b: 0.535941},
      RGB{r: 0.244972, g: 0.287675, b: 0.537260},
      RGB{r: 0.243113, g: 0.292092, b: 0.538516},
      RGB{r: 0.241237, g: 0.296485, b: 0.539709},
      RGB{r: 0.239346, g: 0.300855, b: 0.540844},
      RGB{r: 0.237441, g: 0.305202, b: 0.541921},
      RGB{r: 0.235526, g: 0.309527, b: 0.542944},
      RGB{r: 0.233603, g: 0.313828, b: 0.543914},
      RGB{r: 0.231674, g: 0.318106, b: 0.544834},
      RGB{r: 0.229739, g: 0.322361, b: 0.545706},
      RGB{r: 0.227802, g: 0.326594, b: 0.546532},
      RGB{r: 0.225863, g: 0.330805, b: 0.547314},
      RGB{r: 0.223925, g: 0.334994, b: 0.548053},
      RGB{r: 0.221989, g: 0.339161, b: 0.548752},
      RGB{r: 0.220057, g: 0.343307, b: 0.549413},
      RGB{r: 0.218130, g: 0.347432, b: 0.550038},
      RGB{r: 0.216210, g: 0.351535, b: 0.550627},
      RGB{r: 0.214298, g: 0.355619, b: 0.551184},
      RGB{r: 0.212395, g: 0.359683, b: 0.551710},
      RGB{r: 0.210503, g: 0.363727, b: 0.552206},
      RGB{r: 0.208623, g: 0.367752, b: 0.552675},
      RGB{r: 0.206756, g: 0.371758, b: 0.553117},
      RGB{r: 0.204903, g: 0.375746, b: 0.553533},
      RGB{r: 0.203063, g: 0.379716, b: 0.553925},
      RGB{r: 0.201239, g: 0.383670, b: 0.554294},
      RGB{r: 0.199430, g: 0.387607, b: 0.554642},
      RGB{r: 0.197636, g: 0.391528, b: 0.554969},
      RGB{r: 0.195860, g: 0.395433, b: 0.555276},
      RGB{r: 0.194100, g: 0.399323, b: 0.555565},
      RGB{r: 0.192357, g: 0.403199, b: 0.555836},
      RGB{r: 0.190631, g: 0.407061, b: 0.556089},
      RGB{r: 0.188923, g: 0.410910, b: 0.556326},
      RGB{r: 0.187231, g: 0.414746, b: 0.556547},
      RGB{r: 0.185556, g: 0.418570, b: 0.556753},
      RGB{r: 0.183898, g: 0.422383, b: 0.556944},
      RGB{r: 0.182256, g: 0.426184, b: 0.557120},
      RGB{r: 0.180629, g: 0.429975, b: 0.557282},
      RGB{r: 0.179019, g: 0.433756, b: 0.557430},
      RGB{r: 0.177423, g: 0.437527, b: 0.557565},
      RGB{r: 0.175841, g: 0.441290, b: 0.557685},
      RGB{r: 0.174274, g: 0.445044, b: 0.557792},
      RGB{r: 0.172719, g: 0.448791, b: 0.557885},
      RGB{r: 0.171176, g: 0.452530, b: 0.557965},
      RGB{r: 0.169646, g: 0.456262, b: 0.558030},
      RGB{r: 0.168126, g: 0.459988, b: 0.558082},
      RGB{r: 0.166617, g: 0.463708, b: 0.558119},
      RGB{r: 0.165117, g: 0.467423, b: 0.558141},
      RGB{r: 0.163625, g: 0.471133, b: 0.558148},
      RGB{r: 0.162142, g: 0.474838, b: 0.558140},
      RGB{r: 0.160665, g: 0.478540, b: 0.558115},
      RGB{r: 0.159194, g: 0.482237, b: 0.558073},
      RGB{r: 0.157729, g: 0.485932, b: 0.558013},
      RGB{r: 0.156270, g: 0.489624, b: 0.557936},
      RGB{r: 0.154815, g: 0.493313, b: 0.557840},
      RGB{r: 0.153364, g: 0.497000, b: 0.557724},
      RGB{r: 0.151918, g: 0.500685, b: 0.557587},
      RGB{r: 0.150476, g: 0.504369, b: 0.557430},
      RGB{r: 0.149039, g: 0.508051, b: 0.557250},
      RGB{r: 0.147607, g: 0.511733, b: 0.557049},
      RGB{r: 0.146180, g: 0.515413, b: 0.556823},
      RGB{r: 0.144759, g: 0.519093, b: 0.556572},
      RGB{r: 0.143343, g: 0.522773, b: 0.556295},
      RGB{r: 0.141935, g: 0.526453, b: 0.555991},
      RGB{r: 0.140536, g: 0.530132, b: 0.555659},
      RGB{r: 0.139147, g: 0.533812, b: 0.555298},
      RGB{r: 0.137770, g: 0.537492, b: 0.554906},
      RGB{r: 0.136408, g: 0.541173, b: 0.554483},
      RGB{r: 0.135066, g: 0.544853, b: 0.554029},
      RGB{r: 0.133743, g: 0.548535, b: 0.553541},
      RGB{r: 0.132444, g: 0.552216, b: 0.553018},
      RGB{r: 0.131172, g: 0.555899, b: 0.552459},
      RGB{r: 0.129933, g: 0.559582, b: 0.551864},
      RGB{r: 0.128729, g: 0.563265, b: 0.551229},
      RGB{r: 0.127568, g: 0.566949, b: 0.550556},
      RGB{r: 0.126453, g: 0.570633, b: 0.549841},
      RGB{r: 0.125394, g: 0.574318, b: 0.549086},
      RGB{r: 0.124395, g: 0.578002, b: 0.548287},
      RGB{r: 0.123463, g: 0.581687, b: 0.547445},
      RGB{r: 0.122606, g: 0.585371, b: 0.546557},
      RGB{r: 0.121831, g: 0.589055, b: 0.545623},
      RGB{r: 0.121148, g: 0.592739, b: 0.544641},
      RGB{r: 0.120565, g: 0.596422, b: 0.543611},
      RGB{r: 0.120092, g: 0.600104, b: 0.542530},
      RGB{r: 0.119738, g: 0.603785, b: 0.541400},
      RGB{r: 0.119512, g: 0.607464, b: 0.540218},
      RGB{r: 0.119423, g: 0.611141, b: 0.538982},
      RGB{r: 0.119483, g: 0.614817, b: 0.537692},
      RGB{r: 0.119699, g: 0.618490, b: 0.536347},
      RGB{r: 0.120081, g: 0.622161, b: 0.534946},
      RGB{r: 0.120638, g: 0.625828, b: 0.533488},
      RGB{r: 0.121380, g: 0.629492, b: 0.531973},
      RGB{r: 0.122312, g: 0.633153, b: 0.530398},
      RGB{r: 0.123444, g: 0.636809, b: 0.528763},
      RGB{r: 0.124780, g: 0.640461, b: 0.527068},
      RGB{r: 0.126326, g: 0.644107, b: 0.525311},
      RGB{r: 0.128087, g: 0.647749, b: 0.523491},
      RGB{r: 0.130067, g: 0.651384, b: 0.521608},
      RGB{r: 0.132268, g: 0.655014, b: 0.519661},
      RGB{r: 0.134692, g: 0.658636, b: 0.517649},
      RGB{r: 0.137339, g: 0.662252, b: 0.515571},
      RGB{r: 0.140210, g: 0.665859, b: 0.513427},
      RGB{r: 0.143303, g: 0.669459, b: 0.511215},
      RGB{r: 0.146616, g: 0.673050, b: 0.508936},
      RGB{r: 0.150148, g: 0.676631, b: 0.506589},
      RGB{r: 0.153894, g: 0.680203, b: 0.504172},
      RGB{r: 0.157851, g: 0.683765, b: 0.501686},
      RGB{r: 0.162016, g: 0.687316, b: 0.499129},
      RGB{r: 0.166383, g: 0.690856, b: 0.496502},
      RGB{r: 0.170948, g: 0.694384, b: 0.493803},
      RGB{r: 0.175707, g: 0.697900, b: 0.491033},
      RGB{r: 0.180653, g: 0.701402, b: 0.488189},
      RGB{r: 0.185783, g: 0.704891, b: 0.485273},
      RGB{r: 0.191090, g: 0.708366, b: 0.482284},
      RGB{r: 0.196571, g: 0.711827, b: 0.479221},
      RGB{r: 0.202219, g: 0.715272, b: 0.476084},
      RGB{r: 0.208030, g: 0.718701, b: 0.472873},
      RGB{r: 0.214000, g: 0.722114, b: 0.469588},
      RGB{r: 0.220124, g: 0.725509, b: 0.466226},
      RGB{r: 0.226397, g: 0.728888, b: 0.462789},
      RGB{r: 0.232815, g: 0.732247, b: 0.459277},
      RGB{r: 0.239374, g: 0.735588, b: 0.455688},
      RGB{r: 0.246070, g: 0.738910, b: 0.452024},
      RGB{r: 0.252899, g: 0.742211, b: 0.448284},
      RGB{r: 0.259857, g: 0.745492, b: 0.444467},
      RGB{r: 0.266941, g: 0.748751, b: 0.440573},
      RGB{r: 0.274149, g: 0.751988, b: 0.436601},
      RGB{r: 0.281477, g: 0.755203, b: 0.432552},
      RGB{r: 0.288921, g: 0.758394, b: 0.428426},
      RGB{r: 0.296479, g: 0.761561, b: 0.424223},
      RGB{r: 0.304148, g: 0.764704, b: 0.419943},
      RGB{r: 0.311925, g: 0.767822, b: 0.415586},
      RGB{r: 0.319809, g: 0.770914, b: 0.411152},
      RGB{r: 0.327796, g: 0.773980, b: 0.406640},
      RGB{r: 0.335885, g: 0.777018, b: 0.402049},
      RGB{r: 0.344074, g: 0.780029, b: 0.397381},
      RGB{r: 0.352360, g: 0.783011, b: 0.392636},
      RGB{r: 0.360741, g: 0.785964, b: 0.387814},
      RGB{r: 0.369214, g: 0.788888, b: 0.382914},
      RGB{r: 0.377779, g: 0.791781, b: 0.377939},
      RGB{r: 0.386433, g: 0.794644, b: 0.372886},
      RGB{r: 0.395174, g: 0.797475, b: 0.367757},
      RGB{r: 0.404001, g: 0.800275, b: 0.362552},
      RGB{r: 0.412913, g: 0.803041, b: 0.357269},
      RGB{r: 0.421908, g: 0.805774, b: 0.351910},
      RGB{r: 0.430983, g: 0.808473, b: 0.346476},
      RGB{r: 0.440137, g: 0.811138, b: 0.340967},
      RGB{r: 0.449368, g: 0.813768, b: 0.335384},
      RGB{r: 0.458674, g: 0.816363, b: 0.329727},
      RGB{r: 0.468053, g: 0.818921, b: 0.323998},
      RGB{r: 0.477504, g: 0.821444, b: 0.318195},
      RGB{r: 0.487026, g: 0.823929, b: 0.312321},
      RGB{r: 0.496615, g: 0.826376, b: 0.306377},
      RGB{r: 0.506271, g: 0.828786, b: 0.300362},
      RGB{r: 0.515992, g: 0.831158, b: 0.294279},
      RGB{r: 0.525776, g: 0.833491, b: 0.288127},
      RGB{r: 0.535621, g: 0.835785, b: 0.281908},
      RGB{r: 0.545524, g: 0.838039, b: 0.275626},
      RGB{r: 0.555484, g: 0.840254, b: 0.269281},
      RGB{r: 0.565498, g: 0.842430, b: 0.262877},
      RGB{r: 0.575563, g: 0.844566, b: 0.256415},
      RGB{r: 0.585678, g: 0.846661, b: 0.249897},
      RGB{r: 0.595839, g: 0.848717, b: 0.243329},
      RGB{r: 0.606045, g: 0.850733, b: 0.236712},
      RGB{r: 0.616293, g: 0.852709, b: 0.230052},
      RGB{r: 0.626579, g: 0.854645, b: 0.223353},
      RGB{r: 0.636902, g: 0.856542, b: 0.216620},
      RGB{r: 0.647257, g: 0.858400, b: 0.209861},
      RGB{r: 0.657642, g: 0.860219, b: 0.203082},
      RGB{r: 0.668054, g: 0.861999, b: 0.196293},
      RGB{r: 0.678489, g: 0.863742, b: 0.189503},
      RGB{r: 0.688944, g: 0.865448, b: 0.182725},
      RGB{r: 0.699415, g: 0.867117, b: 0.175971},
      RGB{r: 0.709898, g: 0.868751, b: 0.169257},
      RGB{r: 0.720391, g: 0.870350, b: 0.162603},
      RGB{r: 0.730889, g: 0.871916, b: 0.156029},
      RGB{r: 0.741388, g: 0.873449, b: 0.149561},
      RGB{r: 0.751884, g: 0.874951, b: 0.143228},
      RGB{r: 0.762373, g: 0.876424, b: 0.137064},
      RGB{r: 0.772852, g: 0.877868, b: 0.131109},
      RGB{r: 0.783315, g: 0.879285, b: 0.125405},
      RGB{r: 0.793760, g: 0.880678, b: 0.120005},
      RGB{r: 0.804182, g: 0.882046, b: 0.114965},
      RGB{r: 0.814576, g: 0.883393, b: 0.110347},
      RGB{r: 0.824940, g: 0.884720, b: 0.106217},
      RGB{r: 0.835270, g: 0.886029, b: 0.102646},
      RGB{r: 0.845561, g: 0.887322, b: 0.099702},
      RGB{r: 0.855810, g: 0.888601, b: 0.097452},
      RGB{r: 0.866013, g: 0.889868, b: 0.095953},
      RGB{r: 0.876168, g: 0.891125, b: 0.095250},
      RGB{r: 0.886271, g: 0.892374, b: 0.095374},
      RGB{r: 0.896320, g: 0.893616, b: 0.096335},
      RGB{r: 0.906311, g: 0.894855, b: 0.098125},
      RGB{r: 0.916242, g: 0.896091, b: 0.100717},
      RGB{r: 0.926106, g: 0.897330, b: 0.104071},
      RGB{r: 0.935904, g: 0.898570, b: 0.108131},
      RGB{r: 0.945636, g: 0.899815, b: 0.112838},
      RGB{r: 0.955300, g: 0.901065, b: 0.118128},
      RGB{r: 0.964894, g: 0.902323, b: 0.123941},
      RGB{r: 0.974417, g: 0.903590, b: 0.130215},
      RGB{r: 0.983868, g: 0.904867, b: 0.136897},
      RGB{r: 0.993248, g: 0.906157, b: 0.143936},
    ]};
}

lazy_static! {
  pub(crate) static ref CIVIDIS: PaletteData = PaletteData {
    name: "cividis",
    rgb: vec![
      RGB{r: 0.000000, g: 0.135112, b: 0.304751},
      RGB{r: 0.130669, g: 0.231458, b: 0.432840},
      RGB{r: 0.298421, g: 0.332247, b: 0.423973},
      RGB{r: 0.425120, g: 0.431334, b: 0.447692},
      RGB{r: 0.555393, g: 0.537807, b: 0.471147},
      RGB{r: 0.695985, g: 0.648334, b: 0.440072},
      RGB{r: 0.849223, g: 0.771947, b: 0.359729},
      RGB{r: 0.995737, g: 0.909344, b: 0.217772},
    ]};
}

lazy_static! {
  pub(crate) static ref ALL_PALETTES: [&'static PaletteData; 5] = [
    &*MAGMA, &*INFERNO, &*PLASMA, &*VIRIDIS, &*CIVIDIS,
  ];
}
